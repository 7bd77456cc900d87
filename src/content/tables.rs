//! Hand-authored dialog tables
//!
//! One table per (stage band, ratio bucket), plus the final-clear celebration
//! and the generic fallback.

use crate::types::line::MoodTag::{self, *};

pub type Table = &'static [(&'static str, MoodTag)];

pub const EARLY_NEAR_COMPLETE: Table = &[
    ("So close! You nearly hit the goal.", Happy),
    ("Keep that pace and the next stage is yours.", Encouraging),
];

pub const EARLY_MODERATE: Table = &[
    ("Halfway there. Not bad for a start.", Normal),
    ("You're getting the hang of it.", Encouraging),
];

pub const EARLY_SOME_PROGRESS: Table = &[
    ("A little progress is still progress.", Normal),
    ("Try watching the patterns a bit more closely.", Encouraging),
];

pub const EARLY_NO_PROGRESS: Table = &[
    ("Hmm... nothing this time.", Sad),
    ("Everyone stumbles at first. Let's try again!", Encouraging),
];

pub const MID_NEAR_COMPLETE: Table = &[
    ("Wow, that was almost perfect!", Surprised),
    ("The middle stages really suit you.", Happy),
];

pub const MID_MODERATE: Table = &[
    ("Solid work. The goal is within reach.", Normal),
    ("A little more focus and you'll get there.", Encouraging),
];

pub const MID_SOME_PROGRESS: Table = &[
    ("It's getting tougher, isn't it?", Sad),
    ("Take a breath. You've got more in you.", Encouraging),
];

pub const MID_NO_PROGRESS: Table = &[
    ("That stage got the better of us.", Sad),
    ("Let's rest up and come back stronger.", Encouraging),
];

pub const LATE_NEAR_COMPLETE: Table = &[
    ("Incredible... this far in and still nearly flawless!", Surprised),
    ("Only a few stages left now.", Happy),
    ("I believe in you.", Encouraging),
];

pub const LATE_MODERATE: Table = &[
    ("The late stages are no joke.", Normal),
    ("But you held your ground.", Encouraging),
];

pub const LATE_SOME_PROGRESS: Table = &[
    ("That was rough out there.", Sad),
    ("Don't give up this close to the end.", Encouraging),
];

pub const LATE_NO_PROGRESS: Table = &[
    ("...That didn't go well at all.", Sad),
    ("Even veterans have days like this.", Normal),
    ("Let's go again.", Encouraging),
];

pub const FINAL_NEAR_COMPLETE: Table = &[
    ("This is it... you nearly conquered the final stage!", Surprised),
    ("One more push and it's done.", Encouraging),
];

pub const FINAL_MODERATE: Table = &[
    ("The final stage is the hardest of all.", Normal),
    ("You're closer than you think.", Encouraging),
];

pub const FINAL_SOME_PROGRESS: Table = &[
    ("The last stage fights back hard.", Sad),
    ("But look how far you've come.", Encouraging),
];

pub const FINAL_NO_PROGRESS: Table = &[
    ("The final stage... it's overwhelming, I know.", Sad),
    ("Let's face it together once more.", Encouraging),
];

pub const FINAL_CLEAR: Table = &[
    ("You did it... you really did it!", Surprised),
    ("Every single stage, all the way to the end.", Happy),
    ("When we started, I wasn't sure we'd make it.", Normal),
    ("But you never gave up, not even once.", Encouraging),
    ("Thank you for coming all this way with me.", Happy),
    ("Congratulations!", Happy),
];

pub const FALLBACK: Table = &[
    ("Good work out there.", Normal),
    ("Let's keep going!", Encouraging),
];
