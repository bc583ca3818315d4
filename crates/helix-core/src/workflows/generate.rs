use crate::core::models::form::DnaForm;
use crate::core::models::ids::ObjectId;
use crate::core::scene::traits::HostScene;
use crate::engine::config::GenerationConfig;
use crate::engine::error::EngineError;
use crate::engine::helix::{BasePair, HelixGenerator, HelixStep};
use crate::engine::placement::{MaterialSet, place_backbone, place_base, place_joint};
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Point3;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedSymbol {
    pub index: usize,
    pub symbol: char,
}

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub form: DnaForm,
    /// Number of sequence symbols visited, valid or not.
    pub sequence_length: usize,
    pub pairs_placed: usize,
    pub skipped: Vec<SkippedSymbol>,
    pub base_blocks: usize,
    pub backbones: usize,
    pub joints: usize,
    /// Height of the topmost placed pair above the origin.
    pub height: f64,
    /// Every object created, in creation order.
    pub objects: Vec<ObjectId>,
}

impl GenerationReport {
    fn new(form: DnaForm, sequence_length: usize) -> Self {
        Self {
            form,
            sequence_length,
            pairs_placed: 0,
            skipped: Vec::new(),
            base_blocks: 0,
            backbones: 0,
            joints: 0,
            height: 0.0,
            objects: Vec::new(),
        }
    }

    pub fn total_objects(&self) -> usize {
        self.base_blocks + self.backbones + self.joints
    }
}

/// Previous strand points, one per strand.
type PreviousPair = (Point3<f64>, Point3<f64>);

#[instrument(skip_all, name = "generation_workflow", fields(form = %config.form))]
pub fn run<S: HostScene>(
    scene: &mut S,
    sequence: &str,
    config: &GenerationConfig,
    reporter: &ProgressReporter,
) -> Result<GenerationReport, EngineError> {
    // === Phase 1: Scene preparation ===
    reporter.report(Progress::PhaseStart {
        name: "Preparing Scene",
    });
    if config.clear_scene {
        info!("Clearing existing scene objects.");
        scene.clear();
    }
    let materials = MaterialSet::create(scene, &config.palette)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Walk the sequence ===
    reporter.report(Progress::PhaseStart {
        name: "Building Helix",
    });
    let sequence_length = sequence.chars().count();
    info!(
        "Generating {}-DNA for {} symbol(s) (twist {}°, rise {}, diameter {}, {}-handed).",
        config.form,
        sequence_length,
        config.params.twist_angle,
        config.params.rise,
        config.params.diameter,
        config.params.handedness
    );
    reporter.report(Progress::TaskStart {
        total_steps: sequence_length as u64,
    });

    let generator = HelixGenerator::new(config.params);
    let mut report = GenerationReport::new(config.form, sequence_length);
    let mut previous: Option<PreviousPair> = None;

    for step in generator.walk(sequence) {
        match step {
            HelixStep::Skipped { index, symbol } => {
                warn!("Skipping invalid base '{}' at index {}.", symbol, index);
                reporter.report(Progress::SymbolSkipped { index, symbol });
                report.skipped.push(SkippedSymbol { index, symbol });
            }
            HelixStep::Pair(pair) => {
                emit_pair(scene, &pair, previous.as_ref(), config, &materials, &mut report)?;
                previous = Some((pair.strand_a.position, pair.strand_b.position));
            }
        }
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    info!(
        "Helix complete: {} pair(s), {} skipped, {} object(s).",
        report.pairs_placed,
        report.skipped.len(),
        report.total_objects()
    );
    Ok(report)
}

fn emit_pair<S: HostScene>(
    scene: &mut S,
    pair: &BasePair,
    previous: Option<&PreviousPair>,
    config: &GenerationConfig,
    materials: &MaterialSet,
    report: &mut GenerationReport,
) -> Result<(), EngineError> {
    let i = pair.index;
    let (a, b) = (&pair.strand_a, &pair.strand_b);

    for strand in [a, b] {
        let name = format!("Base_{}_{}", i, strand.base);
        report
            .objects
            .push(place_base(scene, &name, strand, config, materials)?);
        report.base_blocks += 1;
    }

    if let Some((prev_a, prev_b)) = previous {
        for (label, start, end) in [("A", prev_a, &a.position), ("B", prev_b, &b.position)] {
            let name = format!("Backbone_{}_{}", label, i);
            report
                .objects
                .push(place_backbone(scene, &name, start, end, config, materials)?);
            report.backbones += 1;
        }
    }

    for (label, location) in [("A", &a.position), ("B", &b.position)] {
        let name = format!("Joint_{}_{}", label, i);
        report
            .objects
            .push(place_joint(scene, &name, location, config, materials)?);
        report.joints += 1;
    }

    report.pairs_placed += 1;
    report.height = a.position.z;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::primitive::{Color, Primitive, PrimitiveKind, Transform};
    use crate::core::scene::memory::InMemoryScene;
    use crate::engine::config::GenerationConfigBuilder;
    use std::sync::{Arc, Mutex};

    const EPS: f64 = 1e-9;

    fn config(form: DnaForm) -> GenerationConfig {
        GenerationConfigBuilder::new().form(form).build().unwrap()
    }

    fn names(scene: &InMemoryScene) -> Vec<String> {
        scene.objects_iter().map(|(_, o)| o.name.clone()).collect()
    }

    #[test]
    fn two_base_sequence_creates_expected_objects_in_order() {
        let mut scene = InMemoryScene::new();
        let report = run(
            &mut scene,
            "AT",
            &config(DnaForm::B),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(
            names(&scene),
            vec![
                "Base_0_A",
                "Base_0_T",
                "Joint_A_0",
                "Joint_B_0",
                "Base_1_T",
                "Base_1_A",
                "Backbone_A_1",
                "Backbone_B_1",
                "Joint_A_1",
                "Joint_B_1",
            ]
        );
        assert_eq!(report.pairs_placed, 2);
        assert_eq!(report.base_blocks, 4);
        assert_eq!(report.backbones, 2);
        assert_eq!(report.joints, 4);
        assert_eq!(report.objects.len(), 10);
        assert!((report.height - 0.34).abs() < EPS);
    }

    #[test]
    fn first_index_has_joints_but_no_backbone() {
        let mut scene = InMemoryScene::new();
        let report = run(
            &mut scene,
            "G",
            &config(DnaForm::A),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(report.backbones, 0);
        assert_eq!(report.joints, 2);
        assert_eq!(scene.count_by_kind().get(&PrimitiveKind::Cylinder), None);
    }

    #[test]
    fn object_counts_scale_with_sequence_length() {
        let mut scene = InMemoryScene::new();
        let sequence = "ATGCGTACGCTAAGCT";
        let n = sequence.len();
        run(
            &mut scene,
            sequence,
            &config(DnaForm::Z),
            &ProgressReporter::new(),
        )
        .unwrap();

        let counts = scene.count_by_kind();
        assert_eq!(counts[&PrimitiveKind::Cube], 2 * n);
        assert_eq!(counts[&PrimitiveKind::Cylinder], 2 * (n - 1));
        assert_eq!(counts[&PrimitiveKind::UvSphere], 2 * n);
    }

    #[test]
    fn invalid_symbol_skips_geometry_but_keeps_accumulating() {
        let mut scene = InMemoryScene::new();
        let report = run(
            &mut scene,
            "ATXG",
            &config(DnaForm::B),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(
            report.skipped,
            vec![SkippedSymbol {
                index: 2,
                symbol: 'X'
            }]
        );
        assert_eq!(report.sequence_length, 4);
        assert_eq!(report.pairs_placed, 3);
        assert!(scene.find_object_by_name("Base_2_X").is_none());
        assert!(scene.find_object_by_name("Joint_A_2").is_none());

        let joint = scene
            .object(scene.find_object_by_name("Joint_A_3").unwrap())
            .unwrap();
        let theta = 108.0f64.to_radians();
        let expected = Point3::new(theta.cos(), theta.sin(), 3.0 * 0.34);
        assert!((joint.transform.location - expected).norm() < EPS);

        let bridge = scene
            .object(scene.find_object_by_name("Backbone_A_3").unwrap())
            .unwrap();
        let Primitive::Cylinder { depth, .. } = bridge.primitive else {
            panic!("expected a cylinder");
        };
        let prev = Point3::new(36.0f64.to_radians().cos(), 36.0f64.to_radians().sin(), 0.34);
        assert!((depth - (expected - prev).norm()).abs() < EPS);
    }

    #[test]
    fn lowercase_sequence_is_accepted() {
        let mut scene = InMemoryScene::new();
        let report = run(
            &mut scene,
            "atgc",
            &config(DnaForm::B),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert!(report.skipped.is_empty());
        assert!(scene.find_object_by_name("Base_0_A").is_some());
        assert!(scene.find_object_by_name("Base_3_G").is_some());
    }

    #[test]
    fn bases_use_their_own_materials() {
        let mut scene = InMemoryScene::new();
        run(
            &mut scene,
            "GA",
            &config(DnaForm::B),
            &ProgressReporter::new(),
        )
        .unwrap();

        for (name, material) in [
            ("Base_0_G", "G"),
            ("Base_0_C", "C"),
            ("Base_1_A", "A"),
            ("Base_1_T", "T"),
            ("Backbone_B_1", "Backbone"),
            ("Joint_A_0", "Backbone"),
        ] {
            let id = scene.find_object_by_name(name).unwrap();
            assert_eq!(scene.material_name_of(id), Some(material), "{}", name);
        }
    }

    #[test]
    fn clear_scene_controls_existing_objects() {
        let mut scene = InMemoryScene::new();
        scene
            .add_primitive(
                "Leftover",
                Primitive::Cube { size: 1.0 },
                Transform::default(),
                None,
            )
            .unwrap();

        let keep = GenerationConfigBuilder::new()
            .form(DnaForm::B)
            .clear_scene(false)
            .build()
            .unwrap();
        run(&mut scene, "A", &keep, &ProgressReporter::new()).unwrap();
        assert!(scene.find_object_by_name("Leftover").is_some());
        assert_eq!(scene.object_count(), 5);

        run(&mut scene, "A", &config(DnaForm::B), &ProgressReporter::new()).unwrap();
        assert!(scene.find_object_by_name("Leftover").is_none());
        assert_eq!(scene.object_count(), 4);
        assert!(scene.find_material_by_name("Backbone.001").is_some());
    }

    #[test]
    fn empty_sequence_produces_no_objects() {
        let mut scene = InMemoryScene::new();
        let report = run(
            &mut scene,
            "",
            &config(DnaForm::B),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert!(scene.is_empty());
        assert_eq!(report.total_objects(), 0);
        assert_eq!(report.height, 0.0);
    }

    #[test]
    fn progress_events_follow_the_sequence() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        let mut scene = InMemoryScene::new();
        run(&mut scene, "AXT", &config(DnaForm::B), &reporter).unwrap();

        let events = events.lock().unwrap();
        let increments = events
            .iter()
            .filter(|e| matches!(e, Progress::TaskIncrement))
            .count();
        assert_eq!(increments, 3);
        assert!(events.iter().any(|e| matches!(
            e,
            Progress::SymbolSkipped {
                index: 1,
                symbol: 'X'
            }
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            Progress::TaskStart { total_steps: 3 }
        )));
    }

    struct RejectingScene;

    #[derive(Debug, thiserror::Error)]
    #[error("host is read-only")]
    struct ReadOnly;

    impl HostScene for RejectingScene {
        type Error = ReadOnly;

        fn clear(&mut self) {}

        fn create_material(
            &mut self,
            _name: &str,
            _color: Color,
        ) -> Result<crate::core::models::ids::MaterialId, Self::Error> {
            Err(ReadOnly)
        }

        fn add_primitive(
            &mut self,
            _name: &str,
            _primitive: Primitive,
            _transform: Transform,
            _material: Option<crate::core::models::ids::MaterialId>,
        ) -> Result<ObjectId, Self::Error> {
            Err(ReadOnly)
        }
    }

    #[test]
    fn host_errors_abort_the_run() {
        let result = run(
            &mut RejectingScene,
            "AT",
            &config(DnaForm::B),
            &ProgressReporter::new(),
        );
        let Err(EngineError::Host { operation, name, .. }) = result else {
            panic!("expected a host error");
        };
        assert_eq!(operation, "material");
        assert_eq!(name, "A");
    }
}
