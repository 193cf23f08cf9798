//! Static plugin metadata.
//!
//! What a host wrapper reports when it scans the plugin: display name,
//! vendor, version and where the plugin sits in the host's browser. A MIDI
//! effect is filed as category `"Fx"` with `"Midi"` among its
//! sub-categories, which is how hosts decide to route event buses to it.
//!
//! Built entirely in `const` context so the result can live in a `static`.
//!
//! ```
//! use slotcc_core::PluginConfig;
//!
//! pub static CONFIG: PluginConfig = PluginConfig::new("CC Router")
//!     .with_vendor("Studio Tools")
//!     .with_version("2.1.0")
//!     .with_sub_categories("Fx|Midi");
//!
//! assert!(CONFIG.is_midi_fx());
//! ```

/// Metadata a host reads during plugin scanning.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Name shown in the host's plugin browser.
    pub name: &'static str,

    pub vendor: &'static str,

    /// Product page.
    pub url: &'static str,

    /// Usually `env!("CARGO_PKG_VERSION")`.
    pub version: &'static str,

    /// Top-level browser category: `"Fx"` or `"Instrument"`.
    pub category: &'static str,

    /// Pipe-separated browser tags, e.g. `"Fx|Midi"`.
    pub sub_categories: &'static str,

    /// Whether the wrapper should open an editor window.
    pub has_editor: bool,
}

impl PluginConfig {
    /// An effect with no vendor, no tags and no editor.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            vendor: "Unknown Vendor",
            url: "",
            version: "1.0.0",
            category: "Fx",
            sub_categories: "",
            has_editor: false,
        }
    }

    pub const fn with_vendor(mut self, vendor: &'static str) -> Self {
        self.vendor = vendor;
        self
    }

    pub const fn with_url(mut self, url: &'static str) -> Self {
        self.url = url;
        self
    }

    pub const fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }

    pub const fn with_category(mut self, category: &'static str) -> Self {
        self.category = category;
        self
    }

    /// Replace the browser tags.
    pub const fn with_sub_categories(mut self, sub_categories: &'static str) -> Self {
        self.sub_categories = sub_categories;
        self
    }

    /// Ask the wrapper for an editor window (slot grid, preset browser).
    pub const fn with_editor(mut self) -> Self {
        self.has_editor = true;
        self
    }

    /// Whether the tags file this plugin under MIDI effects.
    pub fn is_midi_fx(&self) -> bool {
        self.category == "Fx" && self.sub_categories.split('|').any(|tag| tag == "Midi")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PluginConfig::new("Plain");
        assert_eq!(config.category, "Fx");
        assert!(!config.has_editor);
        assert!(!config.is_midi_fx());
    }

    #[test]
    fn test_midi_fx_tag() {
        let config = PluginConfig::new("Router").with_sub_categories("Fx|Midi");
        assert!(config.is_midi_fx());

        // Substring matches do not count
        let config = PluginConfig::new("Other").with_sub_categories("Fx|MidiLike");
        assert!(!config.is_midi_fx());

        let config = PluginConfig::new("Synth")
            .with_category("Instrument")
            .with_sub_categories("Instrument|Midi");
        assert!(!config.is_midi_fx());
    }
}
