/// Convert a page URL into a string usable as a file or directory name
pub fn sanitize_filename(url: &str) -> String {
    // Remove protocol and replace invalid filename characters
    let mut name = url
        .replace("http://", "")
        .replace("https://", "")
        .replace("file://", "");
    name = name.replace(['/', '\\', ':', '?', '&', '=', '#', '%', '*', '"', '<', '>', '|'], "_");
    let name = name.trim_matches('_');

    // Limit filename length without splitting a character
    let name = name.chars().take(100).collect::<String>();
    if name.is_empty() {
        "page".to_string()
    } else {
        name
    }
}
