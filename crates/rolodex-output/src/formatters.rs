use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rolodex_pipeline::DirectoryPage;
use rolodex_types::User;

const AVATAR_DISPLAY_LIMIT: usize = 48;
const MAX_VISIBLE_PAGES: usize = 5;

pub fn format_cards(page: &DirectoryPage) -> String {
    if page.users.is_empty() {
        return "No users match the current filters".to_string();
    }

    let cards: Vec<String> = page.users.iter().map(format_card).collect();
    format!("{}\n\n{}", cards.join("\n\n"), format_page_footer(page))
}

fn format_card(user: &User) -> String {
    [
        user.full_name(),
        format!("  Age: {}", user.age),
        format!("  Email: {}", user.email),
        format!("  Photo: {}", avatar_display(user, 300, 200)),
    ]
    .join("\n")
}

pub fn format_table(page: &DirectoryPage) -> String {
    if page.users.is_empty() {
        return "No users match the current filters".to_string();
    }

    let mut rows = vec![format!(
        "{:<4} {:<24} {:>3}  {:<28} {}",
        "ID", "Name", "Age", "Email", "Photo"
    )];
    for user in &page.users {
        rows.push(format!(
            "{:<4} {:<24} {:>3}  {:<28} {}",
            user.id,
            user.full_name(),
            user.age,
            user.email,
            avatar_display(user, 60, 60)
        ));
    }
    format!("{}\n\n{}", rows.join("\n"), format_page_footer(page))
}

/// Pagination summary with a window of at most five page numbers around the
/// current one.
pub fn format_page_footer(page: &DirectoryPage) -> String {
    if page.page_count <= 1 {
        return format!("{} user(s)", page.total);
    }

    let mut start = page.page.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(page.page_count);
    if end - start + 1 < MAX_VISIBLE_PAGES {
        start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    }

    let numbers: Vec<String> = (start..=end)
        .map(|n| {
            if n == page.page {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect();

    format!(
        "Page {} of {} ({} users): {}",
        page.page,
        page.page_count,
        page.total,
        numbers.join(" ")
    )
}

/// Self-contained SVG data URL shown for records without a photo.
pub fn placeholder_avatar(width: u32, height: u32, text: &str) -> String {
    let font_size = (width / 8).max(8);
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><rect width="100%" height="100%" fill="#e0e0e0"/><text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-family="sans-serif" font-size="{font_size}" fill="#666">{text}</text></svg>"##
    );
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

fn avatar_display(user: &User, width: u32, height: u32) -> String {
    let source = user
        .avatar
        .clone()
        .unwrap_or_else(|| placeholder_avatar(width, height, "No photo"));
    truncate(&source, AVATAR_DISPLAY_LIMIT)
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let head: String = text.chars().take(limit).collect();
    format!("{}... [{} chars]", head, text.len())
}
