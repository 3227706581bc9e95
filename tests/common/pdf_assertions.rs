use lopdf::Document as LopdfDocument;

/// Extract all text content from a PDF document, page by page.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Base font names referenced by any page's resources.
#[allow(dead_code)]
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = std::collections::BTreeSet::new();
    for (_page_num, page_id) in doc.get_pages() {
        let Ok(page_dict) = doc.get_object(page_id).and_then(|o| o.as_dict()) else {
            continue;
        };
        let Ok(resources) = page_dict.get(b"Resources") else {
            continue;
        };
        let resources = match resources.as_reference() {
            Ok(id) => match doc.get_object(id).and_then(|o| o.as_dict()) {
                Ok(dict) => dict,
                Err(_) => continue,
            },
            Err(_) => match resources.as_dict() {
                Ok(dict) => dict,
                Err(_) => continue,
            },
        };
        let Ok(font_dict) = resources.get(b"Font").and_then(|o| o.as_dict()) else {
            continue;
        };
        for (_name, value) in font_dict.iter() {
            let font = match value.as_reference() {
                Ok(id) => doc.get_object(id).and_then(|o| o.as_dict()),
                Err(_) => value.as_dict(),
            };
            if let Ok(font) = font {
                if let Ok(base) = font.get(b"BaseFont").and_then(|o| o.as_name()) {
                    fonts.insert(String::from_utf8_lossy(base).to_string());
                }
            }
        }
    }
    fonts.into_iter().collect()
}
