//! Example prompts offered to a new user

/// Questions shown as one-click suggestions
pub const EXAMPLE_PROMPTS: [&str; 5] = [
    "How many PTO days in Year 1?",
    "What is the PTO carryover limit?",
    "How do I request leave?",
    "Request PTO from 2025-10-02 to 2025-10-04 for user Pranshav",
    "List all of Pranshav's leave requests",
];
