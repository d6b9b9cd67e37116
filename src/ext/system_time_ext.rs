use std::time::SystemTime;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

pub trait SystemTimeExt {
    /// The instant in the local time zone, falling back to UTC when the
    /// offset cannot be determined.
    fn to_local_datetime(&self) -> OffsetDateTime;

    /// `YYYY-MM-DD HH:MM` in local time, as shown in directory listings.
    fn to_listing_stamp(&self) -> String;
}

impl SystemTimeExt for SystemTime {
    fn to_local_datetime(&self) -> OffsetDateTime {
        let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        OffsetDateTime::from(*self).to_offset(offset)
    }

    fn to_listing_stamp(&self) -> String {
        let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
        self.to_local_datetime()
            .format(&format)
            .unwrap_or_else(|_| "????-??-?? ??:??".to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn listing_stamp_has_fixed_shape() {
        let stamp = SystemTime::now().to_listing_stamp();
        assert_eq!(stamp.len(), 16);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
    }

    #[test]
    fn local_datetime_preserves_the_instant() {
        let instant = SystemTime::UNIX_EPOCH + Duration::from_secs(86_400 * 365);
        let local = instant.to_local_datetime();
        assert_eq!(local.unix_timestamp(), 86_400 * 365);
    }
}
