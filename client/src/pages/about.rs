//! Static page describing the service.

use leptos::prelude::*;

use crate::components::credits_display::MAX_CREDITS;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="page">
            <section class="card">
                <header class="card__header">
                    <h1 class="card__title">"About Bill Parser"</h1>
                    <p class="card__description">"Turn photos of receipts into structured data"</p>
                </header>
                <div class="card__content about">
                    <h2>"How it works"</h2>
                    <ol>
                        <li>"Enter your API key and press Validate to see your remaining credits."</li>
                        <li>"Drop or select a JPG or PNG photo of a bill."</li>
                        <li>"The image is sent to the parsing service, which reads it with a vision model."</li>
                        <li>"The extracted data is shown as JSON, ready to copy."</li>
                    </ol>
                    <h2>"What gets extracted"</h2>
                    <p>
                        "Restaurant name, bill number, date, line items with quantity and price, "
                        "subtotal, taxes, grand total, address and any other notes on the bill. "
                        "When the bill cannot be structured, the raw text is returned instead."
                    </p>
                    <h2>"Credits"</h2>
                    <p>
                        {format!("Each key comes with {MAX_CREDITS} credits. ")}
                        "Every successful parse uses one credit. Failed requests are free."
                    </p>
                    <h2>"Privacy"</h2>
                    <p>"Images are forwarded for parsing and are not stored by this site."</p>
                </div>
            </section>
        </main>
    }
}
