use serde::{Deserialize, Serialize};

/// Which calendar days the aligner emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CalendarMode {
    /// Every calendar day, weekends and holidays included.
    #[default]
    AllDays,
    /// Saturdays and Sundays are skipped unless the raw series has an entry on that day.
    Weekdays,
}
