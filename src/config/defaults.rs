// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Site**: Where the site is served from and its shared partials
//! - **Gallery**: Photo folder, recognized extensions, thumbnail loading
//! - **Forms**: Selectable options offered by the sign-up forms
//! - **Store**: Document store endpoint

// ==========================================================================
// Site Defaults
// ==========================================================================

/// Page location the site is served from. Relative paths resolve against it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Shared header fragment, relative to the base URL.
pub const DEFAULT_HEADER_PARTIAL: &str = "header.html";

/// Shared footer fragment, relative to the base URL.
pub const DEFAULT_FOOTER_PARTIAL: &str = "footer.html";

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Photo folder, relative to the base URL (no leading slash so the site
/// keeps working when served from a sub-path).
pub const DEFAULT_GALLERY_FOLDER: &str = "Images/photoAlbum/";

/// Well-known manifest file inside the photo folder.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Recognized image file extensions (matched case-insensitively).
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".bmp", ".jfif", ".pjpeg", ".pjp", ".avif",
];

/// Number of thumbnails fetched concurrently after the grid is rendered.
pub const DEFAULT_THUMBNAIL_CONCURRENCY: usize = 4;

/// Lower bound for thumbnail concurrency.
pub const MIN_THUMBNAIL_CONCURRENCY: usize = 1;

/// Upper bound for thumbnail concurrency.
pub const MAX_THUMBNAIL_CONCURRENCY: usize = 16;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Programs offered on the application form.
pub const DEFAULT_PROGRAMS: &[&str] = &[
    "Youth Sports",
    "After-School Tutoring",
    "Summer Camp",
    "Adult Education",
    "Senior Activities",
];

/// Volunteer interest areas.
pub const DEFAULT_INTERESTS: &[&str] = &[
    "Events",
    "Tutoring",
    "Mentoring",
    "Fundraising",
    "Outreach",
    "Administration",
];

/// Volunteer frequency choices.
pub const DEFAULT_FREQUENCIES: &[&str] = &["Weekly", "Biweekly", "Monthly", "Occasionally"];

// ==========================================================================
// Store Defaults
// ==========================================================================

/// Firestore REST endpoint (override to target the emulator).
pub const DEFAULT_STORE_ENDPOINT: &str = "https://firestore.googleapis.com/v1";

/// Firestore database id.
pub const DEFAULT_STORE_DATABASE: &str = "(default)";
