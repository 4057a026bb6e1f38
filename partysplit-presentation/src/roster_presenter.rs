use crate::{
    settlement_presenter::display_name,
    text_table::{Alignment, TextTableBuilder},
};
use partysplit_domain::{Amount, Roster};
use partysplit_i18n as i18n;
use std::borrow::Cow;

pub struct RosterPresenter;

impl RosterPresenter {
    /// Roster as a table; positions are 1-based, matching the CLI arguments.
    pub fn render(roster: &Roster) -> String {
        if roster.is_empty() {
            return format!("{}\n", i18n::EMPTY_ROSTER);
        }

        let headers = [
            Cow::Borrowed(i18n::POSITION),
            Cow::Borrowed(i18n::NAME),
            Cow::Borrowed(i18n::SPENT),
            Cow::Borrowed(i18n::ALIAS),
            Cow::Borrowed(i18n::ENABLED),
        ];

        TextTableBuilder::new()
            .alignments(&[
                Alignment::Right,
                Alignment::Left,
                Alignment::Right,
                Alignment::Left,
                Alignment::Center,
            ])
            .headers(&headers)
            .rows(roster.iter().enumerate().map(|(idx, participant)| {
                [
                    Cow::Owned((idx + 1).to_string()),
                    Cow::Borrowed(display_name(&participant.name)),
                    Cow::Owned(Amount::new(participant.spent).to_string()),
                    Cow::Borrowed(participant.alias.as_str()),
                    Cow::Borrowed(if participant.enabled {
                        i18n::YES
                    } else {
                        i18n::NO
                    }),
                ]
            }))
            .build()
    }
}

#[cfg(all(test, not(feature = "es")))]
mod tests {
    use super::*;
    use partysplit_domain::Participant;

    #[test]
    fn render_shows_every_row_with_one_based_positions() {
        let roster = Roster::new(vec![
            Participant::new("Ana", 30.0, "ana.mp"),
            Participant::new("", 7.5, "").disabled(),
        ]);

        assert_eq!(
            RosterPresenter::render(&roster),
            "#  Name       Spent  Alias   Enabled\n\
             -  ---------  -----  ------  -------\n\
             1  Ana        30.00  ana.mp    yes\n\
             2  (unnamed)   7.50            no\n"
        );
    }

    #[test]
    fn empty_roster_has_a_message() {
        assert_eq!(
            RosterPresenter::render(&Roster::default()),
            "No participants yet.\n"
        );
    }
}
