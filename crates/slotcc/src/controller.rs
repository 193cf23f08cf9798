//! Control-thread API.
//!
//! [`SlotController`] is what an editor (or a test) drives: slot edits,
//! parameter edits with host notification, activity polling, presets, reset
//! and state save/restore. None of it may be called from the audio thread.
//!
//! Any operation that rewrites slot routing wholesale (preset apply, user
//! preset load, reset, state restore) also invalidates the mapper's
//! last-sent cache, so every active slot re-emits its value on the next
//! block.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use slotcc_core::{HostNotifier, ParameterValue, PluginError, PluginResult};

use crate::bank::SlotBank;
use crate::catalog;
use crate::error::{PresetError, PresetResult};
use crate::parameters::value_to_text;
use crate::preset::{merge_mappings, BuiltinPreset, PresetTag};
use crate::slot::{parse_cc_text, SlotConfig, NUM_SLOTS};
use crate::state::{capture_slots, PluginState, SlotRecord};
use crate::store::{PresetStore, PresetSummary, UserPreset};

/// Manufacturer used when a user preset is saved without one.
pub const DEFAULT_USER_MANUFACTURER: &str = "Custom";

#[derive(Debug, Default)]
struct PresetSession {
    current: Option<PresetTag>,
    /// Serialized form of the last saved or loaded user preset.
    user_preset: String,
}

/// Handle to the plugin's shared state for the control thread.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct SlotController {
    bank: Arc<SlotBank>,
    host: Arc<dyn HostNotifier>,
    store: Arc<PresetStore>,
    session: Arc<Mutex<PresetSession>>,
}

impl SlotController {
    pub fn new(host: Arc<dyn HostNotifier>, store: PresetStore) -> Self {
        Self {
            bank: Arc::new(SlotBank::new()),
            host,
            store: Arc::new(store),
            session: Arc::new(Mutex::new(PresetSession::default())),
        }
    }

    /// The shared slot state.
    pub fn bank(&self) -> &Arc<SlotBank> {
        &self.bank
    }

    pub fn preset_store(&self) -> &PresetStore {
        &self.store
    }

    fn session(&self) -> MutexGuard<'_, PresetSession> {
        self.session.lock().unwrap_or_else(|p| p.into_inner())
    }

    // =========================================================================
    // Slots
    // =========================================================================

    /// Snapshot of a slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_SLOTS`, as do all slot accessors.
    pub fn slot(&self, index: usize) -> SlotConfig {
        self.bank.slots.get(index)
    }

    /// Replace a slot's whole configuration.
    pub fn set_slot(&self, index: usize, config: &SlotConfig) {
        self.bank.slots.set_routing(
            index,
            config.cc_number,
            config.midi_channel as i32,
            config.enabled,
        );
        self.set_slot_name(index, &config.name);
    }

    pub fn set_cc_number(&self, index: usize, cc_number: i32) {
        self.bank.slots.set_cc_number(index, cc_number);
    }

    /// Set the CC number from the editor's text field.
    pub fn set_cc_text(&self, index: usize, text: &str) {
        self.set_cc_number(index, parse_cc_text(text));
    }

    pub fn set_midi_channel(&self, index: usize, channel: i32) {
        self.bank.slots.set_midi_channel(index, channel);
    }

    pub fn set_enabled(&self, index: usize, enabled: bool) {
        self.bank.slots.set_enabled(index, enabled);
    }

    /// Rename a slot and its automation parameter, and tell the host.
    pub fn set_slot_name(&self, index: usize, name: &str) {
        self.rename_quietly(index, name);
        self.host.parameter_titles_changed();
    }

    fn rename_quietly(&self, index: usize, name: &str) {
        self.bank.slots.set_name(index, name);
        self.bank.parameters.slot(index).set_name(name);
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    pub fn parameter_value(&self, index: usize) -> ParameterValue {
        self.bank.parameters.slot(index).get()
    }

    /// Parameter value as displayed, `"0"` .. `"127"`.
    pub fn parameter_text(&self, index: usize) -> String {
        value_to_text(self.parameter_value(index))
    }

    /// Set a slot's parameter from the editor and notify the host.
    pub fn set_parameter_value(&self, index: usize, value: ParameterValue) {
        let parameter = self.bank.parameters.slot(index);
        parameter.set(value);
        self.host
            .parameter_value_changed(parameter.id(), parameter.get());
    }

    // =========================================================================
    // Activity
    // =========================================================================

    /// Whether the slot emitted since the last poll. Clears the flag.
    pub fn poll_activity(&self, index: usize) -> bool {
        self.bank.activity.poll_and_clear(index)
    }

    /// Poll every slot at once.
    pub fn poll_all_activity(&self) -> [bool; NUM_SLOTS] {
        self.bank.activity.poll_all()
    }

    // =========================================================================
    // Presets
    // =========================================================================

    /// The preset currently loaded, if any.
    pub fn current_preset(&self) -> Option<PresetTag> {
        self.session().current.clone()
    }

    /// Serialized last user preset, or empty.
    pub fn user_preset_blob(&self) -> String {
        self.session().user_preset.clone()
    }

    /// Apply a built-in template.
    ///
    /// The first `L` slots take the template's CC numbers and labels and are
    /// enabled; the rest are disabled and unassigned. Channels and parameter
    /// values are kept.
    pub fn apply_builtin(&self, preset: &BuiltinPreset) {
        log::debug!("Applying preset {} / {}", preset.manufacturer, preset.name);

        let assignments = merge_mappings(preset.mappings());
        for (index, assignment) in assignments.iter().enumerate() {
            let slots = &self.bank.slots;
            slots.set_cc_number(index, assignment.cc_number);
            slots.set_enabled(index, assignment.enabled);
            self.rename_quietly(index, &assignment.name);
        }
        self.bank.mapper.invalidate_all();
        self.host.parameter_titles_changed();

        self.session().current = Some(PresetTag::builtin(preset));
    }

    /// Apply the built-in template with this manufacturer and name.
    pub fn apply_builtin_preset(&self, manufacturer: &str, name: &str) -> PresetResult<()> {
        let preset = catalog::find(manufacturer, name).ok_or_else(|| PresetError::NotFound {
            manufacturer: manufacturer.to_string(),
            name: name.to_string(),
        })?;
        self.apply_builtin(preset);
        Ok(())
    }

    /// Save the current slots as a user preset.
    ///
    /// Inputs are trimmed. An empty name is rejected and nothing changes; an
    /// empty manufacturer becomes [`DEFAULT_USER_MANUFACTURER`].
    pub fn save_user_preset(&self, manufacturer: &str, name: &str) -> PresetResult<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }
        let manufacturer = match manufacturer.trim() {
            "" => DEFAULT_USER_MANUFACTURER,
            m => m,
        };

        let preset = UserPreset {
            manufacturer: manufacturer.to_string(),
            name: name.to_string(),
            slots: capture_slots(&self.bank.slots, &self.bank.parameters),
        };
        let json = preset.to_json()?;
        let path = self.store.save(&preset)?;

        let mut session = self.session();
        session.current = Some(PresetTag::user(manufacturer, name));
        session.user_preset = json;
        Ok(path)
    }

    /// Load a user preset file and apply it.
    pub fn load_user_preset(&self, path: &Path) -> PresetResult<()> {
        let preset = PresetStore::load(path)?;
        self.apply_user_preset(&preset)
    }

    /// Load the user preset stored under this manufacturer and name.
    pub fn load_user_preset_by_name(&self, manufacturer: &str, name: &str) -> PresetResult<()> {
        let preset = self.store.find(manufacturer, name)?;
        self.apply_user_preset(&preset)
    }

    /// Apply a user preset: every recorded slot gets its CC, channel,
    /// enable state, name and parameter value. Unrecorded slots are kept.
    pub fn apply_user_preset(&self, preset: &UserPreset) -> PresetResult<()> {
        log::debug!(
            "Loading user preset {} / {}",
            preset.manufacturer,
            preset.name
        );
        let json = preset.to_json()?;

        self.apply_records(&preset.slots);

        let mut session = self.session();
        session.current = Some(PresetTag::user(&preset.manufacturer, &preset.name));
        session.user_preset = json;
        Ok(())
    }

    /// User presets on disk, sorted by manufacturer and name.
    pub fn user_presets(&self) -> Vec<PresetSummary> {
        self.store.list()
    }

    /// Reset every slot and parameter to defaults and forget the current
    /// preset.
    pub fn reset_all(&self) {
        log::debug!("Resetting all slots");

        for index in 0..NUM_SLOTS {
            let initial = SlotConfig::initial(index);
            self.bank.slots.set_routing(
                index,
                initial.cc_number,
                initial.midi_channel as i32,
                initial.enabled,
            );
            self.rename_quietly(index, &initial.name);
            self.set_parameter_value(index, 0.0);
        }
        self.bank.mapper.invalidate_all();
        self.host.parameter_titles_changed();

        let mut session = self.session();
        session.current = None;
        session.user_preset.clear();
    }

    fn apply_records(&self, records: &[SlotRecord]) {
        for resolved in records.iter().filter_map(SlotRecord::resolve) {
            let config = &resolved.config;
            self.bank.slots.set_routing(
                resolved.index,
                config.cc_number,
                config.midi_channel as i32,
                config.enabled,
            );
            self.rename_quietly(resolved.index, &config.name);
            self.set_parameter_value(resolved.index, resolved.value);
        }
        self.bank.mapper.invalidate_all();
        self.host.parameter_titles_changed();
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Serialize slots, parameter values and preset session.
    pub fn save_state(&self) -> PluginResult<Vec<u8>> {
        let session = self.session();
        let mut state = PluginState {
            slots: capture_slots(&self.bank.slots, &self.bank.parameters),
            user_preset: session.user_preset.clone(),
            ..Default::default()
        };
        state.set_preset_tag(session.current.as_ref());
        drop(session);

        state
            .to_bytes()
            .map_err(|e| PluginError::StateError(e.to_string()))
    }

    /// Restore a blob written by [`SlotController::save_state`].
    ///
    /// A blob that is not valid state is logged and ignored; the current
    /// state stays as it is.
    pub fn load_state(&self, data: &[u8]) -> PluginResult<()> {
        if data.is_empty() {
            return Ok(());
        }
        let state = match PluginState::from_bytes(data) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Ignoring unreadable plugin state: {}", e);
                return Ok(());
            }
        };

        log::debug!("Restoring state with {} slot records", state.slots.len());
        self.apply_records(&state.slots);

        let mut session = self.session();
        session.current = state.preset_tag();
        session.user_preset = state.user_preset;
        Ok(())
    }
}

impl std::fmt::Debug for SlotController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotController")
            .field("bank", &self.bank)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::SLOT_PARAMETER_IDS;
    use crate::slot::CC_UNSET;
    use slotcc_core::{MidiBuffer, ParameterId};

    #[derive(Default)]
    struct RecordingHost {
        values: Mutex<Vec<(ParameterId, ParameterValue)>>,
        titles: Mutex<usize>,
    }

    impl HostNotifier for RecordingHost {
        fn parameter_value_changed(&self, id: ParameterId, normalized: ParameterValue) {
            self.values.lock().unwrap().push((id, normalized));
        }

        fn parameter_titles_changed(&self) {
            *self.titles.lock().unwrap() += 1;
        }
    }

    fn controller() -> (SlotController, Arc<RecordingHost>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let host = Arc::new(RecordingHost::default());
        let controller = SlotController::new(host.clone(), PresetStore::new(dir.path()));
        (controller, host, dir)
    }

    fn run_block(controller: &SlotController) -> usize {
        let mut output = MidiBuffer::new();
        controller.bank().map_block(&mut output)
    }

    #[test]
    fn test_rename_notifies_host() {
        let (c, host, _dir) = controller();
        c.set_slot_name(2, "Resonance");

        assert_eq!(c.slot(2).name, "Resonance");
        assert_eq!(c.bank().parameters.slot(2).name(), "Resonance");
        assert_eq!(*host.titles.lock().unwrap(), 1);
    }

    #[test]
    fn test_parameter_edit_notifies_host() {
        let (c, host, _dir) = controller();
        c.set_parameter_value(1, 2.0);

        assert_eq!(c.parameter_value(1), 1.0);
        assert_eq!(c.parameter_text(1), "127");
        assert_eq!(
            host.values.lock().unwrap().as_slice(),
            &[(SLOT_PARAMETER_IDS[1], 1.0)]
        );
    }

    #[test]
    fn test_cc_text_field() {
        let (c, _host, _dir) = controller();
        c.set_cc_text(0, "200");
        assert_eq!(c.slot(0).cc_number, 127);
        c.set_cc_text(0, "");
        assert_eq!(c.slot(0).cc_number, CC_UNSET);
    }

    #[test]
    fn test_apply_builtin_preset() {
        let (c, _host, _dir) = controller();
        c.set_midi_channel(0, 5);
        c.set_parameter_value(0, 0.5);
        c.set_slot(15, &SlotConfig {
            cc_number: 1,
            midi_channel: 2,
            enabled: true,
            name: "Leftover".to_string(),
        });

        c.apply_builtin_preset("Korg", "Korg Minilogue").unwrap();
        let preset = catalog::find("Korg", "Korg Minilogue").unwrap();
        let len = preset.len();
        assert!(len < NUM_SLOTS);

        for (index, mapping) in preset.mappings().enumerate() {
            let slot = c.slot(index);
            assert!(slot.enabled);
            assert_eq!(slot.cc_number, mapping.cc_number);
            assert_eq!(slot.name, mapping.name);
        }
        for index in len..NUM_SLOTS {
            let slot = c.slot(index);
            assert!(!slot.enabled);
            assert_eq!(slot.cc_number, CC_UNSET);
            assert_eq!(slot.name, format!("Slot {}", index + 1));
        }

        // Channels and values survive
        assert_eq!(c.slot(0).midi_channel, 5);
        assert_eq!(c.parameter_value(0), 0.5);

        let tag = c.current_preset().unwrap();
        assert_eq!(tag.manufacturer, "Korg");
        assert!(!tag.is_user);
    }

    #[test]
    fn test_apply_unknown_builtin() {
        let (c, _host, _dir) = controller();
        assert!(matches!(
            c.apply_builtin_preset("Korg", "Nope"),
            Err(PresetError::NotFound { .. })
        ));
        assert!(c.current_preset().is_none());
    }

    #[test]
    fn test_preset_switch_forces_reemission() {
        let (c, _host, _dir) = controller();
        c.apply_builtin_preset("Korg", "Korg Minilogue").unwrap();
        let len = catalog::find("Korg", "Korg Minilogue").unwrap().len();

        assert_eq!(run_block(&c), len);
        assert_eq!(run_block(&c), 0);

        c.apply_builtin_preset("Korg", "Korg Minilogue").unwrap();
        assert_eq!(run_block(&c), len);
    }

    #[test]
    fn test_save_user_preset_validation() {
        let (c, _host, dir) = controller();
        assert!(matches!(
            c.save_user_preset("Moog", "   "),
            Err(PresetError::EmptyName)
        ));
        assert!(c.current_preset().is_none());
        assert!(c.user_presets().is_empty());

        let path = c.save_user_preset("  ", " My Lead ").unwrap();
        assert_eq!(path, dir.path().join("Custom_My_Lead.json"));
        assert_eq!(
            c.current_preset(),
            Some(PresetTag::user("Custom", "My Lead"))
        );
        assert!(!c.user_preset_blob().is_empty());
    }

    #[test]
    fn test_user_preset_round_trip() {
        let (c, _host, _dir) = controller();
        c.set_slot(0, &SlotConfig {
            cc_number: 74,
            midi_channel: 3,
            enabled: true,
            name: "Cutoff".to_string(),
        });
        c.set_slot(4, &SlotConfig {
            cc_number: 71,
            midi_channel: 16,
            enabled: true,
            name: "Reso".to_string(),
        });
        c.set_parameter_value(0, 0.25);
        c.set_parameter_value(4, 0.75);
        c.save_user_preset("Moog", "Bass").unwrap();

        c.reset_all();
        assert_eq!(c.slot(4), SlotConfig::initial(4));
        assert!(c.current_preset().is_none());
        assert!(c.user_preset_blob().is_empty());

        let listed = c.user_presets();
        assert_eq!(listed.len(), 1);
        c.load_user_preset(&listed[0].path).unwrap();

        assert_eq!(c.slot(0).cc_number, 74);
        assert_eq!(c.slot(0).midi_channel, 3);
        assert_eq!(c.slot(4).name, "Reso");
        assert_eq!(c.slot(4).midi_channel, 16);
        assert_eq!(c.parameter_value(4), 0.75);
        assert_eq!(c.current_preset(), Some(PresetTag::user("Moog", "Bass")));

        c.reset_all();
        c.load_user_preset_by_name("Moog", "Bass").unwrap();
        assert_eq!(c.slot(0).name, "Cutoff");
    }

    #[test]
    fn test_reset_all() {
        let (c, host, _dir) = controller();
        c.apply_builtin_preset("Moog", "Moog Matriarch").unwrap();
        c.set_parameter_value(3, 0.5);
        host.values.lock().unwrap().clear();

        c.reset_all();
        for index in 0..NUM_SLOTS {
            assert_eq!(c.slot(index), SlotConfig::initial(index));
            assert_eq!(c.parameter_value(index), 0.0);
        }
        assert_eq!(host.values.lock().unwrap().len(), NUM_SLOTS);
        assert!(c.current_preset().is_none());
    }

    #[test]
    fn test_state_round_trip() {
        let (c, _host, _dir) = controller();
        c.apply_builtin_preset("Roland", "Roland JU-06A").unwrap();
        c.set_midi_channel(2, 9);
        c.set_slot_name(1, "Renamed");
        for index in 0..NUM_SLOTS {
            c.set_parameter_value(index, index as f64 / 15.0);
        }
        let blob = c.save_state().unwrap();

        let (restored, host, _dir2) = controller();
        restored.load_state(&blob).unwrap();

        for index in 0..NUM_SLOTS {
            assert_eq!(restored.slot(index), c.slot(index));
            assert_eq!(restored.parameter_value(index), c.parameter_value(index));
        }
        assert_eq!(restored.current_preset(), c.current_preset());
        // Restored values reach the host
        assert_eq!(host.values.lock().unwrap().len(), NUM_SLOTS);
    }

    #[test]
    fn test_malformed_state_is_ignored() {
        let (c, _host, _dir) = controller();
        c.set_cc_number(0, 10);

        c.load_state(b"definitely not json").unwrap();
        c.load_state(&[]).unwrap();
        assert_eq!(c.slot(0).cc_number, 10);
    }

    #[test]
    fn test_partial_state_uses_defaults() {
        let (c, _host, _dir) = controller();
        c.load_state(br#"{ "slots": [ { "index": 2, "ccNumber": 20 } ] }"#)
            .unwrap();

        let slot = c.slot(2);
        assert_eq!(slot.cc_number, 20);
        assert_eq!(slot.midi_channel, 1);
        assert!(!slot.enabled);
        assert_eq!(slot.name, "Slot 3");
        assert!(c.current_preset().is_none());
    }
}
