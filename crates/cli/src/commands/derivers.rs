//! Derivers command - list built-in derivers

use anyhow::Result;
use legl_fields_domain::DeriverKind;

use crate::args::DeriversArgs;

pub async fn execute(args: DeriversArgs) -> Result<()> {
    if args.json {
        let output = serde_json::json!({
            "count": DeriverKind::ALL.len(),
            "derivers": DeriverKind::ALL.iter().map(|kind| serde_json::json!({
                "name": kind,
                "summary": kind.summary(),
                "fields": kind.fields(),
            })).collect::<Vec<_>>()
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Derivers ({} built in)", DeriverKind::ALL.len());
        println!("==========================");
        println!();

        for kind in DeriverKind::ALL {
            println!("{}", kind);
            println!("  {}", kind.summary());
            println!("  Reads: {}", kind.fields().join(", "));
            println!();
        }
    }

    Ok(())
}
