//! Sections & tasks every new house starts with.

/// Default sections in display order, each with its default tasks in display order.
pub const DEFAULT_HOUSE_TEMPLATE: &[(&str, &[&str])] = &[
    (
        "Kitchen",
        &["Dishes", "Counters", "Floor", "Trash", "Recycling"],
    ),
    ("Bathroom", &["Toilet", "Shower", "Sink", "Floor"]),
    ("Living Room", &["Vacuum", "Dust", "Organize"]),
    (
        "General",
        &["Take out trash", "Water plants", "Clean windows"],
    ),
];
