//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for the dashboard page
//! - The route handler for the overview partial that the page re-fetches
//!   whenever a transaction is added

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    dashboard::{aggregation::summarize, cards::summary_cards_view},
    html::{
        APP_NAME, BUTTON_PRIMARY_STYLE, CARD_STYLE, PAGE_CONTAINER_STYLE, base,
        dollar_input_styles,
    },
    ledger::Ledger,
    navigation::NavBar,
    session::{SessionState, lock_session},
    transaction::{LEDGER_CHANGED_EVENT, intake_dialog, transaction_list},
};

const TAGLINE: &str = "Track your money, achieve your goals";

const EMPTY_LEDGER_MESSAGE: &str = "No transactions yet. Add your first transaction to get started!";

/// Display a page with the balance, totals and most recent transactions.
///
/// The transaction form dialog is rendered open if the form is open.
pub async fn get_dashboard_page(State(state): State<SessionState>) -> Result<Response, Error> {
    let session = lock_session(&state.session)?;

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let overview = overview_view(session.ledger());
    let dialog = intake_dialog(session.intake().draft());

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            header class="flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between"
            {
                div
                {
                    h1 class="text-3xl font-bold" { (APP_NAME) }
                    p class="text-gray-500 dark:text-gray-400" { (TAGLINE) }
                }

                div class="sm:w-48"
                {
                    button
                        type="button"
                        hx-get=(endpoints::NEW_TRANSACTION_VIEW)
                        hx-target="#intake-dialog"
                        hx-swap="outerHTML"
                        hx-target-error="#alert-container"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Add Transaction"
                    }
                }
            }

            div
                id="dashboard-overview"
                hx-get=(endpoints::DASHBOARD_OVERVIEW)
                hx-trigger={ (LEDGER_CHANGED_EVENT) " from:body" }
                hx-swap="innerHTML"
            {
                (overview)
            }
        }

        (dialog)
    };

    Ok(base("Dashboard", &[dollar_input_styles()], &content).into_response())
}

/// Render the overview cards and recent transactions without the rest of the page.
pub async fn get_dashboard_overview(State(state): State<SessionState>) -> Response {
    match lock_session(&state.session) {
        Ok(session) => overview_view(session.ledger()).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

fn overview_view(ledger: &Ledger) -> Markup {
    let summary = summarize(ledger.iter());

    html! {
        div class="flex flex-col gap-6"
        {
            (summary_cards_view(&summary))

            section class=(CARD_STYLE)
            {
                div class="flex items-baseline justify-between mb-4"
                {
                    h2 class="text-xl font-semibold" { "Recent Transactions" }

                    @if !ledger.is_empty() {
                        a
                            href=(endpoints::TRANSACTIONS_VIEW)
                            class="text-sm text-blue-600 hover:underline dark:text-blue-500"
                        {
                            "View all"
                        }
                    }
                }

                (transaction_list(ledger.recent(), EMPTY_LEDGER_MESSAGE))
            }
        }
    }
}
