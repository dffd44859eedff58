/// How the UI ends up in front of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    NativeWindow,
    Browser,
}

impl PresentationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationMode::NativeWindow => "native-window",
            PresentationMode::Browser => "browser",
        }
    }
}

impl std::fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
