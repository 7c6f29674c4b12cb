//! Live keyboard modifier state from the host OS.
//!
//! On macOS this is a single call to Carbon's `GetCurrentKeyModifiers()`,
//! which reports the combined session state regardless of which
//! application has focus. On Windows the Win32 key state of each modifier
//! is mapped onto the same Carbon bit layout.

use crate::error::ModifierError;
use crate::modifiers::ModifierBitmask;

#[cfg(target_os = "macos")]
mod carbon {
    #[link(name = "Carbon", kind = "framework")]
    extern "C" {
        fn GetCurrentKeyModifiers() -> u32;
    }

    pub fn current_key_modifiers() -> u32 {
        unsafe { GetCurrentKeyModifiers() }
    }
}

#[cfg(target_os = "windows")]
mod win32 {
    use windows::Win32::UI::Input::KeyboardAndMouse::{
        GetAsyncKeyState, GetKeyState, VIRTUAL_KEY, VK_CAPITAL, VK_CONTROL, VK_LWIN, VK_MENU,
        VK_RWIN, VK_SHIFT,
    };

    use crate::modifiers::{Modifier, ModifierBitmask};

    fn is_held(key: VIRTUAL_KEY) -> bool {
        // High bit of the returned SHORT is set while the key is down.
        (unsafe { GetAsyncKeyState(key.0 as i32) } as u16 & 0x8000) != 0
    }

    fn is_toggled(key: VIRTUAL_KEY) -> bool {
        (unsafe { GetKeyState(key.0 as i32) } as u16 & 0x0001) != 0
    }

    /// Fn is handled by keyboard firmware and never reaches Win32.
    pub fn current_key_modifiers() -> ModifierBitmask {
        let states = [
            (Modifier::CapsLock, is_toggled(VK_CAPITAL)),
            (Modifier::Shift, is_held(VK_SHIFT)),
            (Modifier::Control, is_held(VK_CONTROL)),
            (Modifier::Option, is_held(VK_MENU)),
            (Modifier::Cmd, is_held(VK_LWIN) || is_held(VK_RWIN)),
        ];
        ModifierBitmask::from_modifiers(
            states
                .into_iter()
                .filter(|(_, down)| *down)
                .map(|(modifier, _)| modifier),
        )
    }
}

/// Query the modifier keys currently held down.
///
/// Makes exactly one OS query per invocation; nothing is cached.
/// On platforms other than macOS and Windows returns
/// [`ModifierError::Unsupported`].
pub fn read_modifiers() -> Result<ModifierBitmask, ModifierError> {
    #[cfg(target_os = "macos")]
    {
        let bits = carbon::current_key_modifiers();
        tracing::debug!(bits, "read modifier state");
        Ok(ModifierBitmask(bits))
    }
    #[cfg(target_os = "windows")]
    {
        let bitmask = win32::current_key_modifiers();
        tracing::debug!(bits = bitmask.bits(), "read modifier state");
        Ok(bitmask)
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        Err(ModifierError::Unsupported {
            platform: std::env::consts::OS,
        })
    }
}
