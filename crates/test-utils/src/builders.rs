#![allow(dead_code)]

use std::path::Path;

use dagkit::config::{ConfigFile, DisplaySection, GenerateSection, RawConfigFile, WeightRange};
use dagkit::types::{HeaderMode, LayoutStrategy, RenderStyle};

/// Builder for the `[generate]` section to simplify test setup.
pub struct GenerateBuilder {
    section: GenerateSection,
}

impl GenerateBuilder {
    pub fn new() -> Self {
        Self {
            section: GenerateSection::default(),
        }
    }

    pub fn vertices(mut self, n: u32) -> Self {
        self.section.vertices = n;
        self
    }

    pub fn edges(mut self, m: usize) -> Self {
        self.section.edges = m;
        self
    }

    pub fn sink_edges(mut self, k: usize) -> Self {
        self.section.sink_edges = k;
        self
    }

    pub fn dag_weight(mut self, low: i64, high: i64) -> Self {
        self.section.dag_weight = WeightRange(low, high);
        self
    }

    pub fn sink_weight(mut self, low: i64, high: i64) -> Self {
        self.section.sink_weight = WeightRange(low, high);
        self
    }

    pub fn repeated_edges(mut self, allow: bool) -> Self {
        self.section.allow_repeated_edges = allow;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.section.seed = Some(seed);
        self
    }

    pub fn output(mut self, path: impl AsRef<Path>) -> Self {
        self.section.output = path.as_ref().to_path_buf();
        self
    }

    pub fn build(self) -> GenerateSection {
        self.section
    }
}

impl Default for GenerateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for the `[display]` section.
pub struct DisplayBuilder {
    section: DisplaySection,
}

impl DisplayBuilder {
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        let mut section = DisplaySection::default();
        section.input = input.as_ref().to_path_buf();
        section.output = output.as_ref().to_path_buf();
        Self { section }
    }

    pub fn header_mode(mut self, mode: HeaderMode) -> Self {
        self.section.header_mode = mode;
        self
    }

    pub fn layout(mut self, layout: LayoutStrategy) -> Self {
        self.section.layout = layout;
        self
    }

    pub fn style(mut self, style: RenderStyle) -> Self {
        self.section.style = style;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.section.seed = Some(seed);
        self
    }

    pub fn build(self) -> DisplaySection {
        self.section
    }
}

/// Validate a full config from the two sections.
pub fn config_from(generate: GenerateSection, display: DisplaySection) -> ConfigFile {
    ConfigFile::try_from(RawConfigFile { generate, display })
        .expect("Failed to build valid config from builder")
}
