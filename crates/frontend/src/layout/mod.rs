pub mod header;

use header::Header;
use leptos::prelude::*;

/// Page frame: header bar on top, page content below.
///
/// ```text
/// +------------------------------------------+
/// |  Profession  | Business Directory | Theme |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
