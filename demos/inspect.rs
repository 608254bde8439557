//! Inspector example: build a small package and render its report

use mem_zip::{build, inspect, render_report};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let archive = build([
        ("template.json", br#"{"templateKey":"demo","name":"Demo"}"#.as_slice()),
        ("SKILL.md", b"# Demo Template\n\nHow to use this template.\n".as_slice()),
        ("README.md", b"# Demo\n\nHuman-readable documentation.\n".as_slice()),
    ])?;

    let reports = inspect(&archive)?;
    print!("{}", render_report(&reports));

    Ok(())
}
