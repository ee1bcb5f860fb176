//! `goscaff version`: the build version and every supported choice.

use goscaff_core::domain::{CiProvider, ConfigFormat, Database, Framework, GoVersion, Logger};
use serde_json::json;

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

pub fn execute(output: OutputManager) -> CliResult<()> {
    let version = env!("CARGO_PKG_VERSION");

    if output.format() == OutputFormat::Json {
        output.json(&json!({
            "version": version,
            "core_version": goscaff_core::VERSION,
            "choices": choices()
                .iter()
                .map(|(label, values)| (label.to_lowercase().replace(' ', "_"), json!(values)))
                .collect::<serde_json::Map<_, _>>(),
        }))?;
        return Ok(());
    }

    output.header(&format!("goscaff {version}"))?;
    output.print("")?;
    for (label, values) in choices() {
        output.print(&format!("  {:<15} {}", format!("{label}:"), values.join(", ")))?;
    }
    Ok(())
}

fn choices() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("Go versions", GoVersion::ALL.iter().map(GoVersion::as_str).collect()),
        ("Frameworks", Framework::ALL.iter().map(Framework::as_str).collect()),
        ("Databases", Database::ALL.iter().map(Database::as_str).collect()),
        ("Loggers", Logger::ALL.iter().map(Logger::as_str).collect()),
        ("Config formats", ConfigFormat::ALL.iter().map(ConfigFormat::as_str).collect()),
        ("CI providers", CiProvider::ALL.iter().map(CiProvider::as_str).collect()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_choice_group_is_listed() {
        let groups = choices();
        assert_eq!(groups.len(), 6);
        assert!(groups.iter().all(|(_, values)| !values.is_empty()));
        let formats = &groups[4].1;
        assert_eq!(formats, &["env", "yaml", "json", "toml"]);
    }
}
