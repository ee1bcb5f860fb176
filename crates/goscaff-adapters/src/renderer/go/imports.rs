//! Go import block assembly.

use std::collections::BTreeSet;

/// Collects imports and renders them the way `goimports` groups them:
/// standard library first, then everything else, each group sorted.
#[derive(Debug, Default, Clone)]
pub(crate) struct ImportSet {
    std: BTreeSet<String>,
    external: BTreeSet<String>,
}

impl ImportSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add an import. Paths whose first element has no dot are stdlib.
    /// Aliased imports are written as `alias "path"`.
    pub(crate) fn add(&mut self, entry: impl Into<String>) -> &mut Self {
        let entry = entry.into();
        let path = entry.rsplit(' ').next().unwrap_or(&entry).trim_matches('"');
        let first = path.split('/').next().unwrap_or(path);

        let quoted = if entry.contains('"') {
            entry.clone()
        } else {
            format!("\"{entry}\"")
        };

        if first.contains('.') {
            self.external.insert(quoted);
        } else {
            self.std.insert(quoted);
        }
        self
    }

    pub(crate) fn add_all<'a>(&mut self, entries: impl IntoIterator<Item = &'a str>) -> &mut Self {
        for entry in entries {
            self.add(entry);
        }
        self
    }

    pub(crate) fn render(&self) -> String {
        let group = |set: &BTreeSet<String>| {
            set.iter()
                .map(|s| format!("\t{s}\n"))
                .collect::<String>()
        };

        let mut out = String::from("import (\n");
        out.push_str(&group(&self.std));
        if !self.std.is_empty() && !self.external.is_empty() {
            out.push('\n');
        }
        out.push_str(&group(&self.external));
        out.push_str(")\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_std_before_external() {
        let mut imports = ImportSet::new();
        imports
            .add("github.com/google/uuid")
            .add("net/http")
            .add("context")
            .add("github.com/acme/svc/internal/config");

        assert_eq!(
            imports.render(),
            "import (\n\t\"context\"\n\t\"net/http\"\n\n\t\"github.com/acme/svc/internal/config\"\n\t\"github.com/google/uuid\"\n)\n"
        );
    }

    #[test]
    fn keeps_aliases_and_blank_imports() {
        let mut imports = ImportSet::new();
        imports
            .add(r#"semconv "go.opentelemetry.io/otel/semconv/v1.21.0""#)
            .add(r#"_ "github.com/go-sql-driver/mysql""#);

        let out = imports.render();
        assert!(out.contains("\tsemconv \"go.opentelemetry.io/otel/semconv/v1.21.0\"\n"));
        assert!(out.contains("\t_ \"github.com/go-sql-driver/mysql\"\n"));
    }

    #[test]
    fn duplicates_collapse() {
        let mut imports = ImportSet::new();
        imports.add_all(["time", "time", "fmt"]);
        assert_eq!(imports.render().matches("\"time\"").count(), 1);
    }
}
