//! Capability descriptors and the writer registry.
//!
//! Each registered format advertises a [`Capabilities`] record (name,
//! description, MIME type, file extensions). A [`Registry`] resolves a
//! format identifier through name, MIME type, and extension in that
//! order, and hands out a configured [`VectorWriter`]. Registering a
//! format twice replaces the earlier entry.

use log::debug;

use super::{Error, VectorFormat, VectorWriter};

/// Describes one export format for discovery and lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    name: String,
    description: String,
    mime_type: String,
    extensions: Vec<String>,
}

impl Capabilities {
    /// Creates a capability record. Extensions are stored lowercase and
    /// without a leading dot.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        mime_type: impl Into<String>,
        extensions: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            mime_type: mime_type.into(),
            extensions: extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    /// Returns the format name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the MIME type.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the recognized file extensions.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

/// Writer registry keyed by format name, MIME type, and file extension.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<(Capabilities, VectorFormat)>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in vector formats registered.
    pub fn with_vector_formats() -> Self {
        let mut registry = Self::new();
        registry.register(
            Capabilities::new(
                VectorFormat::Eps.name(),
                "Encapsulated PostScript",
                VectorFormat::Eps.mime_type(),
                &["eps", "epsf", "epsi"],
            ),
            VectorFormat::Eps,
        );
        registry.register(
            Capabilities::new(
                VectorFormat::Pdf.name(),
                "Portable Document Format",
                VectorFormat::Pdf.mime_type(),
                &["pdf"],
            ),
            VectorFormat::Pdf,
        );
        registry.register(
            Capabilities::new(
                VectorFormat::Svg.name(),
                "Scalable Vector Graphics",
                VectorFormat::Svg.mime_type(),
                &["svg", "svgz"],
            ),
            VectorFormat::Svg,
        );
        registry
    }

    /// Registers a format. A record with the same name replaces the
    /// earlier registration.
    pub fn register(&mut self, capabilities: Capabilities, format: VectorFormat) {
        debug!(format = capabilities.name(); "Registering export format");
        self.entries
            .retain(|(existing, _)| !existing.name().eq_ignore_ascii_case(capabilities.name()));
        self.entries.push((capabilities, format));
    }

    /// Returns the capability records of all registered formats.
    pub fn capabilities(&self) -> impl Iterator<Item = &Capabilities> {
        self.entries.iter().map(|(capabilities, _)| capabilities)
    }

    /// Returns the registered format names.
    pub fn formats(&self) -> Vec<String> {
        self.capabilities()
            .map(|capabilities| capabilities.name().to_string())
            .collect()
    }

    /// Looks up a format by name (case-insensitive).
    pub fn by_name(&self, name: &str) -> Option<&Capabilities> {
        self.entry_by(|capabilities| capabilities.name().eq_ignore_ascii_case(name))
            .map(|(capabilities, _)| capabilities)
    }

    /// Looks up a format by MIME type (case-insensitive).
    pub fn by_mime_type(&self, mime_type: &str) -> Option<&Capabilities> {
        self.entry_by(|capabilities| capabilities.mime_type().eq_ignore_ascii_case(mime_type))
            .map(|(capabilities, _)| capabilities)
    }

    /// Looks up a format by file extension, with or without a leading dot.
    pub fn by_extension(&self, extension: &str) -> Option<&Capabilities> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        self.entry_by(|capabilities| {
            capabilities
                .extensions()
                .iter()
                .any(|candidate| *candidate == extension)
        })
        .map(|(capabilities, _)| capabilities)
    }

    fn entry_by(
        &self,
        predicate: impl Fn(&Capabilities) -> bool,
    ) -> Option<&(Capabilities, VectorFormat)> {
        self.entries
            .iter()
            .find(|(capabilities, _)| predicate(capabilities))
    }

    /// Resolves a format identifier (name, MIME type, or extension, tried
    /// in that order) to a writer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] naming the available formats
    /// when nothing matches.
    pub fn writer_for(&self, identifier: &str) -> Result<VectorWriter, Error> {
        let extension = identifier.trim_start_matches('.').to_ascii_lowercase();
        let entry = self
            .entry_by(|capabilities| capabilities.name().eq_ignore_ascii_case(identifier))
            .or_else(|| {
                self.entry_by(|capabilities| {
                    capabilities.mime_type().eq_ignore_ascii_case(identifier)
                })
            })
            .or_else(|| {
                self.entry_by(|capabilities| {
                    capabilities
                        .extensions()
                        .iter()
                        .any(|candidate| *candidate == extension)
                })
            });

        match entry {
            Some((_, format)) => Ok(VectorWriter::new(*format)),
            None => Err(Error::UnsupportedFormat {
                requested: identifier.to_string(),
                available: self.formats(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_formats_registered() {
        let registry = Registry::with_vector_formats();
        let formats = registry.formats();
        assert_eq!(formats, vec!["EPS", "PDF", "SVG"]);
    }

    #[test]
    fn test_resolve_by_name_mime_and_extension() {
        let registry = Registry::with_vector_formats();

        assert_eq!(registry.writer_for("svg").unwrap().format(), VectorFormat::Svg);
        assert_eq!(
            registry.writer_for("application/pdf").unwrap().format(),
            VectorFormat::Pdf
        );
        assert_eq!(
            registry.writer_for(".epsi").unwrap().format(),
            VectorFormat::Eps
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = Registry::with_vector_formats();
        assert!(registry.by_name("pdf").is_some());
        assert!(registry.by_name("Pdf").is_some());
        assert!(registry.by_extension("SVG").is_some());
    }

    #[test]
    fn test_unknown_identifier_lists_available_formats() {
        let registry = Registry::with_vector_formats();
        let err = registry.writer_for("png").unwrap_err();

        match err {
            Error::UnsupportedFormat {
                requested,
                available,
            } => {
                assert_eq!(requested, "png");
                assert_eq!(available, vec!["EPS", "PDF", "SVG"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reregistration_replaces_entry() {
        let mut registry = Registry::with_vector_formats();
        registry.register(
            Capabilities::new("SVG", "Compressed SVG only", "image/svg+xml", &["svgz"]),
            VectorFormat::Svg,
        );

        assert_eq!(registry.formats().len(), 3);
        let svg = registry.by_name("svg").unwrap();
        assert_eq!(svg.description(), "Compressed SVG only");
        assert!(registry.by_extension("svg").is_none());
    }

    #[test]
    fn test_extensions_normalized() {
        let capabilities = Capabilities::new("X", "test", "application/x", &[".Foo", "BAR"]);
        assert_eq!(capabilities.extensions(), ["foo", "bar"]);
    }
}
