use crate::layout::Layer;

/// A basic key sent together with a modifier mask, e.g. `Cmd-0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPlusMod {
    pub key: u8,
    pub modifiers: u8,
}
impl KeyPlusMod {
    pub const fn new(key: u8, modifiers: u8) -> Self {
        Self { key, modifiers }
    }
}

/// RGB engine commands forwarded to the host; the keymap core never
/// interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbCommand {
    Toggle,
    ModeNext,
    ModePrev,
    HueUp,
    HueDown,
    SatUp,
    SatDown,
    ValUp,
    ValDown,
    SpeedUp,
    SpeedDown,
    FlagNext,
    FlagPrev,
}

/// The fixed text sequences bound on the symbol layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextMacro {
    /// Fenced code block: ``` ``` ```, newline, closing fence, then cursor
    /// back up onto the opening line.
    Backticks,
    /// `~/`
    HomeDir,
    /// `()` with the cursor left between.
    Parens,
    /// `{}` with the cursor left between.
    Braces,
    /// `[]` with the cursor left between.
    Brackets,
}

/// What a keymap table cell does. Resolved once at table-definition time;
/// the mapper only matches on variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Dead position; resolution stops here.
    No,
    /// Fall through to the next active layer below.
    Transparent,
    /// Plain HID key.
    Key(u8),
    /// Key plus modifier combo.
    Shortcut(KeyPlusMod),
    /// Consumer-page usage (media keys and friends).
    Consumer(u16),
    /// RGB engine command.
    Rgb(RgbCommand),
    /// Toggle NKRO reporting on the host.
    NkroToggle,
    /// Layer held while the key is down.
    Momentary(Layer),
    /// Layer toggled on press.
    Toggle(Layer),
    /// Layer held while down; taps the key when released quickly.
    LayerTap(Layer, u8),
    /// The retargetable left thumb key.
    SpaceSelect,
    /// Retarget the thumb key at `Layer` (only honored while Nav is active).
    Selector(Layer),
    /// Play a fixed text sequence on press.
    Text(TextMacro),
    /// Tap the host's input-source switch chord (Ctrl-Space).
    ImeNext,
    /// Collapse every overlay back to the base layer.
    ReturnToBase,
    /// Index into the keymap's tap-dance table.
    TapDance(u8),
}
