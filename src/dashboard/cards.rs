//! Cards showing the balance, total income and total expenses.

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::Summary,
    html::{
        CARD_STYLE, NEGATIVE_AMOUNT_STYLE, POSITIVE_AMOUNT_STYLE, format_currency, round_to_cents,
    },
};

fn balance_style(balance: f64) -> &'static str {
    if round_to_cents(balance) >= 0.0 {
        POSITIVE_AMOUNT_STYLE
    } else {
        NEGATIVE_AMOUNT_STYLE
    }
}

fn summary_card(id: &str, title: &str, amount: &str, amount_style: &str) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            h3 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (title) }

            p id=(id) class={ "mt-2 text-3xl font-bold " (amount_style) } { (amount) }
        }
    }
}

/// Renders the three overview cards for `summary`.
///
/// The balance is shown in green if it is zero or positive and red if it is
/// negative.
pub(super) fn summary_cards_view(summary: &Summary) -> Markup {
    html! {
        div class="grid grid-cols-1 gap-4 md:grid-cols-3"
        {
            (summary_card(
                "balance",
                "Current Balance",
                &format_currency(summary.balance),
                balance_style(summary.balance),
            ))
            (summary_card(
                "total-income",
                "Total Income",
                &format_currency(summary.total_income),
                POSITIVE_AMOUNT_STYLE,
            ))
            (summary_card(
                "total-expenses",
                "Total Expenses",
                &format_currency(summary.total_expenses),
                NEGATIVE_AMOUNT_STYLE,
            ))
        }
    }
}
