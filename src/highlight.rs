use inksac::prelude::*;

/// Colours diagnostics when stderr is a colour-capable terminal. Anything else
/// gets the message byte for byte.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter {
    pub fn new() -> Self {
        let is_tty = unsafe { libc::isatty(libc::STDERR_FILENO) } == 1;
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            enabled: is_tty && !matches!(support, ColorSupport::NoColor),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn error(&self, message: &str) -> String {
        if !self.enabled {
            return message.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        message.style(error_style).to_string()
    }

    pub fn trace(&self, message: &str) -> String {
        if !self.enabled {
            return message.to_string();
        }

        let trace_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();
        message.style(trace_style).to_string()
    }
}
