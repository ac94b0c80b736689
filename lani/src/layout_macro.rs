/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyChord::key(HidKeyCode::A)))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::key(
            $crate::types::keycode::HidKeyCode::$k,
        ))
    };
}

/// Create a key sent with chord modifiers, e.g. `wm!(Z, GUI)` for undo
#[macro_export]
macro_rules! wm {
    ($k: ident, $m: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyChord::new($crate::types::keycode::HidKeyCode::$k, $m),
        ))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::types::action::KeyAction::$a
    };
}

/// Create a tap dance key bound to a `DanceId`
#[macro_export]
macro_rules! td {
    ($d: ident) => {
        $crate::types::action::KeyAction::TapDance($crate::types::action::DanceId::$d)
    };
}

/// Create a text macro key
#[macro_export]
macro_rules! text {
    ($t: ident) => {
        $crate::types::action::KeyAction::Text($crate::types::action::TextMacro::$t)
    };
}
