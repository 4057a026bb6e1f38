use crate::text_table::{Alignment, TextTableBuilder};
use partysplit_domain::Transfer;
use partysplit_i18n as i18n;
use std::{borrow::Cow, fmt::Write as _};

pub struct SettlementPresenter;

impl SettlementPresenter {
    /// Heading followed by one payment instruction per transfer, in engine order.
    pub fn render(transfers: &[Transfer<'_>]) -> String {
        if transfers.is_empty() {
            return format!("{}\n", i18n::NOTHING_TO_SETTLE);
        }

        let mut reply = String::with_capacity(64 * (transfers.len() + 1));
        let _ = writeln!(&mut reply, "{}", i18n::TRANSFERS);
        for transfer in transfers {
            let _ = writeln!(
                &mut reply,
                "{}",
                i18n::transfer_instruction(
                    display_name(transfer.from),
                    display_name(transfer.to),
                    transfer.alias,
                    transfer.amount,
                )
            );
        }
        reply
    }

    pub fn render_table(transfers: &[Transfer<'_>]) -> String {
        if transfers.is_empty() {
            return format!("{}\n", i18n::NOTHING_TO_SETTLE);
        }

        let headers = [
            Cow::Borrowed(i18n::FROM),
            Cow::Borrowed(i18n::TO),
            Cow::Borrowed(i18n::ALIAS),
            Cow::Borrowed(i18n::AMOUNT),
        ];
        TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Left,
                Alignment::Left,
                Alignment::Right,
            ])
            .headers(&headers)
            .rows(transfers.iter().map(|transfer| {
                [
                    Cow::Borrowed(display_name(transfer.from)),
                    Cow::Borrowed(display_name(transfer.to)),
                    Cow::Borrowed(transfer.alias),
                    Cow::Owned(transfer.amount.to_string()),
                ]
            }))
            .build()
    }
}

pub(crate) fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        i18n::UNNAMED
    } else {
        name
    }
}
