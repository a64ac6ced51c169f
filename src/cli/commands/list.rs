use anyhow::Result;
use std::io::Write;

use crate::greeter::get_greeter_factory;

/// List available selectors as text or JSON
pub fn execute_list(json: bool, out: &mut dyn Write) -> Result<()> {
    let infos = get_greeter_factory().selector_infos();

    if json {
        serde_json::to_writer_pretty(&mut *out, &infos)?;
        writeln!(out)?;
    } else {
        for info in &infos {
            writeln!(
                out,
                "{:<8} {:<13} {}",
                info.selector, info.greeting, info.description
            )?;
        }
    }

    out.flush()?;
    Ok(())
}
