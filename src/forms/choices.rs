pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

pub const GENRES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// One `<option>` of a select box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub selected: bool,
}

pub fn options<'a, I>(choices: &[&'static str], selected: I) -> Vec<SelectOption>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    choices
        .iter()
        .map(|value| SelectOption {
            value: *value,
            selected: selected.clone().into_iter().any(|chosen| chosen == *value),
        })
        .collect()
}
