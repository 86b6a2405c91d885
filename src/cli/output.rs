//! Line-based terminal output.
//!
//! `format_*` functions build the lines so they can be tested; `print_*`
//! functions write them to stdout.

use chrono::{DateTime, Local, Utc};

use crate::models::{Comment, Identity, Post, UserId, UserProfile};
use crate::views::Picture;

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const LIKED: &str = "♥";
    pub const NOT_LIKED: &str = "♡";
}

/// Print a title with a heavy rule under it.
///
/// ```text
/// FEED
/// ════════════════════════════════════════════════════════════
/// ```
pub fn print_header(title: &str) {
    println!("{}", title);
    println!("{}", "═".repeat(LINE_WIDTH));
}

/// Print a status line.
///
/// ```text
///   ✓ Signed in as @ana
/// ```
pub fn print_status(icon: &str, message: &str) {
    println!("  {} {}", icon, message);
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn format_time(parsed: Option<DateTime<Utc>>, raw: &str) -> String {
    match parsed {
        Some(time) => time.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}

fn format_comment(comment: &Comment) -> String {
    format!("    {}: {}", comment.author.handle(), comment.content)
}

/// Lines for one post in the feed.
///
/// ```text
/// #3  @ana · 2025-03-01 10:00
///   Hello there
///   ♥ 2 Likes
///     @ben: nice
/// ────────────────────────────────────────────────────────────
/// ```
pub fn format_post(post: &Post, viewer: Option<UserId>) -> Vec<String> {
    let mut lines = vec![
        format!(
            "#{}  {} · {}",
            post.id,
            post.author.handle(),
            format_time(post.created_time(), &post.created_at)
        ),
        format!("  {}", post.content),
    ];

    let liked = viewer.is_some_and(|id| post.is_liked_by(id));
    let icon = if liked { icons::LIKED } else { icons::NOT_LIKED };
    lines.push(format!("  {} {}", icon, post.like_label()));

    lines.extend(post.comments().iter().map(format_comment));
    lines.push("─".repeat(LINE_WIDTH));
    lines
}

pub fn print_feed(posts: &[Post], viewer: Option<UserId>) {
    print_header("FEED");
    if posts.is_empty() {
        println!("  No posts yet.");
        return;
    }
    for post in posts {
        print_lines(&format_post(post, viewer));
    }
}

fn format_picture(picture: &Picture) -> String {
    match picture {
        Picture::None => "(none)".to_string(),
        Picture::Remote(reference) => reference.clone(),
        Picture::LocalPreview(path) => format!("{} (uploading)", path.display()),
    }
}

/// Lines for a profile and its posts.
pub fn format_profile(profile: &UserProfile, picture: &Picture) -> Vec<String> {
    let mut lines = vec![
        profile.display_name(),
        format!("@{}", profile.username),
    ];
    if let Some(email) = &profile.email {
        lines.push(email.clone());
    }
    lines.push(format!("Picture: {}", format_picture(picture)));
    lines.push(String::new());
    lines.push(format!("Posts ({})", profile.posts.len()));
    lines.push("─".repeat(LINE_WIDTH));
    for post in &profile.posts {
        lines.push(format!("  {}", post.content));
        lines.push(format!("  {}", format_time(post.created_time(), &post.created_at)));
    }
    lines
}

pub fn print_profile(profile: &UserProfile, picture: &Picture) {
    print_header("PROFILE");
    print_lines(&format_profile(profile, picture));
}

/// Lines describing the signed-in identity.
pub fn format_identity(user: &Identity) -> Vec<String> {
    let mut lines = vec![format!("{} (id {})", user.handle(), user.id)];
    if let Some(email) = &user.email {
        lines.push(email.clone());
    }
    if let Some(pic) = &user.profile_pic {
        lines.push(format!("Picture: {}", pic));
    }
    lines
}

pub fn print_identity(user: &Identity) {
    print_lines(&format_identity(user));
}
