use ggez::input::keyboard::KeyCode;
use polyglot_jump_shared::FrameInput;

/// Buffers key presses between frames so a press is seen by exactly one tick.
#[derive(Default)]
pub struct InputState {
    jump_pressed: bool,
}

impl InputState {
    pub fn process_key_down(&mut self, key: KeyCode, repeat: bool) {
        if repeat {
            return;
        }
        if is_jump_key(key) {
            self.jump_pressed = true;
        }
    }

    pub fn consume(&mut self) -> FrameInput {
        FrameInput {
            jump: std::mem::take(&mut self.jump_pressed),
        }
    }
}

fn is_jump_key(key: KeyCode) -> bool {
    matches!(key, KeyCode::Space | KeyCode::ArrowUp)
}
