use crate::error::Result;
use dnahelix::core::models::form::DnaForm;
use std::fmt::Write as _;

pub fn run() -> Result<()> {
    print!("{}", format_table());
    Ok(())
}

pub fn format_table() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:>10} {:>8} {:>10} {:>8} {:>10}",
        "Form", "Twist(°)", "Rise", "Diameter", "Radius", "Handedness"
    );
    for form in DnaForm::ALL {
        let p = form.params();
        let _ = writeln!(
            out,
            "{:<6} {:>10.1} {:>8.2} {:>10.2} {:>8.2} {:>10}",
            form.name(),
            p.twist_angle,
            p.rise,
            p.diameter,
            p.radius(),
            p.handedness.to_string()
        );
    }
    out
}
