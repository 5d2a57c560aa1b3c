//! HTML rendering for lists of transactions.

use maud::{Markup, html};
use time::{Date, Month, format_description::BorrowedFormatItem, macros::format_description};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    html::{CATEGORY_BADGE_STYLE, NEGATIVE_AMOUNT_STYLE, POSITIVE_AMOUNT_STYLE, format_currency},
    transaction::{Transaction, TransactionKind},
};

/// The max number of graphemes to display in the transaction rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

const DATE_ATTRIBUTE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

fn amount_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => POSITIVE_AMOUNT_STYLE,
        TransactionKind::Expense => NEGATIVE_AMOUNT_STYLE,
    }
}

/// Format the amount of a transaction with the sign for its kind, e.g.
/// "+$1,000.00" for income and "-$12.50" for an expense.
pub fn format_signed_amount(kind: TransactionKind, amount: f64) -> String {
    let sign = match kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };

    format!("{sign}{}", format_currency(amount.abs()))
}

/// Renders `transactions` as a list, or `empty_message` if there are none.
pub fn transaction_list<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    empty_message: &str,
) -> Markup {
    let mut transactions = transactions.into_iter().peekable();

    if transactions.peek().is_none() {
        return html! {
            div class="text-center py-8 text-gray-500 dark:text-gray-400"
            {
                p data-empty-state { (empty_message) }
            }
        };
    }

    html! {
        ul class="space-y-3"
        {
            @for transaction in transactions {
                (transaction_row(transaction))
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let (name, full_name) = format_description(transaction.display_name());
    let kind = transaction.kind.as_str();

    html! {
        li
            class="flex items-center justify-between p-3 rounded-lg bg-gray-100 dark:bg-gray-700/50"
            data-transaction-id=(transaction.id)
            data-kind=(kind)
        {
            div class="flex flex-col gap-1 min-w-0"
            {
                p class="font-medium truncate" title=[full_name] { (name) }

                div class="flex items-center gap-3 text-sm text-gray-500 dark:text-gray-400"
                {
                    span class=(CATEGORY_BADGE_STYLE) data-category { (transaction.category) }
                    (date_label(transaction.date))
                }
            }

            span
                class={ "font-bold whitespace-nowrap " (amount_class(transaction.kind)) }
                data-amount
            {
                (format_signed_amount(transaction.kind, transaction.amount))
            }
        }
    }
}

/// A `<time>` element for `date`.
///
/// The text is a fallback label. The client script replaces it with the date
/// in the viewer's locale.
fn date_label(date: Date) -> Markup {
    html! {
        time datetime=(date_datetime_attr(date)) data-local-date
        {
            (format_day_label(date))
        }
    }
}

fn format_day_label(date: Date) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        month_abbrev(date.month()),
        date.year()
    )
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

fn date_datetime_attr(date: Date) -> String {
    date.format(DATE_ATTRIBUTE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

fn format_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        let truncated = truncated + "...";
        (truncated, Some(description))
    }
}
