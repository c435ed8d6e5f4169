use yew::prelude::*;

/// Anchor of the savings plans section rendered inside the layout.
pub const SAVINGS_PLANS_ANCHOR: &str = "savings-plans";

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    #[prop_or_default]
    pub children: Html,
}

/// Shared dashboard chrome: sidebar navigation around the page content.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    html! {
        <div class="dashboard-layout">
            <aside class="dashboard-sidebar">
                <h2 class="dashboard-brand">{"Savings Dashboard"}</h2>
                <nav>
                    <ul>
                        <li><a href={format!("#{}", SAVINGS_PLANS_ANCHOR)}>{"Savings Plans"}</a></li>
                    </ul>
                </nav>
            </aside>
            <main class="dashboard-content">
                {props.children.clone()}
            </main>
        </div>
    }
}
