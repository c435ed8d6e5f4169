use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SavingsCalculatorProps {
    pub monthly_amount: String,
    pub duration: String,
    pub result_line: Option<String>,
    pub on_monthly_amount_change: Callback<String>,
    pub on_duration_change: Callback<String>,
    pub on_calculate: Callback<()>,
}

#[function_component(SavingsCalculator)]
pub fn savings_calculator(props: &SavingsCalculatorProps) -> Html {
    let on_amount_input = {
        let on_change = props.on_monthly_amount_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_duration_input = {
        let on_change = props.on_duration_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_calculate_click = {
        let on_calculate = props.on_calculate.clone();
        Callback::from(move |_: MouseEvent| on_calculate.emit(()))
    };

    html! {
        <section class="savings-calculator">
            <h3>{"Savings Calculator"}</h3>
            <input
                type="number"
                placeholder="Monthly Savings Amount (Ksh)"
                value={props.monthly_amount.clone()}
                oninput={on_amount_input}
            />
            <input
                type="number"
                placeholder="Duration (Months)"
                value={props.duration.clone()}
                oninput={on_duration_input}
            />
            <button onclick={on_calculate_click}>{"Calculate Total Saved"}</button>
            {if let Some(line) = &props.result_line {
                html! { <p class="calculator-result">{line}</p> }
            } else { html! {} }}
        </section>
    }
}
