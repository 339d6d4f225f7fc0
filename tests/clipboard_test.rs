use etg::clipboard::{osc52_sequence, ClipboardError, ClipboardSink, MemoryClipboard, Osc52Clipboard};

#[tokio::test]
async fn test_memory_clipboard_keeps_history() {
    let clipboard = MemoryClipboard::new();
    assert_eq!(clipboard.last(), None);

    clipboard.write_text("<t:1:t>").await.unwrap();
    clipboard.write_text("<t:2:R>").await.unwrap();

    assert_eq!(clipboard.last().as_deref(), Some("<t:2:R>"));
    assert_eq!(clipboard.history(), vec!["<t:1:t>".to_string(), "<t:2:R>".to_string()]);
}

#[tokio::test]
async fn test_memory_clipboard_clones_share_contents() {
    let clipboard = MemoryClipboard::new();
    let handle = clipboard.clone();
    clipboard.write_text("shared").await.unwrap();
    assert_eq!(handle.last().as_deref(), Some("shared"));
}

#[test]
fn test_osc52_sequence_shape() {
    let sequence = osc52_sequence("<t:1700000000:F>").unwrap();
    assert!(sequence.starts_with("\x1b]52;"));
    assert!(!sequence.contains("<t:"), "payload must be encoded");
}

#[tokio::test]
async fn test_osc52_clipboard_writes_sequence() {
    let clipboard = Osc52Clipboard::new(Vec::<u8>::new());
    clipboard.write_text("hello").await.unwrap();

    let written = String::from_utf8(clipboard.into_inner()).unwrap();
    assert_eq!(written, osc52_sequence("hello").unwrap());
}

#[test]
fn test_clipboard_error_message() {
    let error = ClipboardError::WriteFailed("permission denied".to_string());
    assert_eq!(error.to_string(), "Failed to copy to clipboard: permission denied");
}
