//! Placeholder wishes shown when neither the remote nor the cache has any.

use crate::models::wish::Wish;

const DEFAULTS: [(&str, &str, &str, &str); 3] = [
    (
        "1",
        "Zafirah & Rizwan",
        "Selamat bertunang Athirah & Fahmi! Semoga dipermudahkan segala urusan ke jinjang pelamin. Barakallah!",
        "12/10/2025",
    ),
    (
        "2",
        "Amirul Hakim",
        "Tahniah korang! Doa kami menyertai kalian. Tak sabar nak tunggu hari besar nanti.",
        "15/10/2025",
    ),
    (
        "3",
        "Nadia & Aiman",
        "Semoga ikatan ini diberkati hingga ke syurga. Tahniah Athirah! Moga menjadi pasangan yang sakinah mawaddah warahmah.",
        "18/10/2025",
    ),
];

pub fn default_wishes() -> Vec<Wish> {
    DEFAULTS
        .iter()
        .map(|(id, name, message, date)| Wish {
            id: (*id).to_string(),
            name: (*name).to_string(),
            message: (*message).to_string(),
            date: (*date).to_string(),
            timestamp: None,
        })
        .collect()
}
