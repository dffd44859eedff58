fn main() {
    // Only the native window needs the Tauri context
    #[cfg(feature = "native-window")]
    tauri_build::build();
}
