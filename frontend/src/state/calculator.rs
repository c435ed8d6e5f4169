use shared::{coerce_number, format_ksh};

/// Monthly amount × duration calculator.
///
/// `total_saved` is a snapshot taken by `calculate`; editing the inputs
/// afterwards does not change it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    monthly_amount: f64,
    duration: f64,
    total_saved: f64,
}

impl CalculatorState {
    pub fn set_monthly_amount(&mut self, input: &str) {
        self.monthly_amount = coerce_number(input);
    }

    pub fn set_duration(&mut self, input: &str) {
        self.duration = coerce_number(input);
    }

    pub fn calculate(&mut self) {
        self.total_saved = self.monthly_amount * self.duration;
    }

    #[cfg(test)]
    pub fn monthly_amount(&self) -> f64 {
        self.monthly_amount
    }

    #[cfg(test)]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[cfg(test)]
    pub fn total_saved(&self) -> f64 {
        self.total_saved
    }

    /// Text for the amount field; zero and negatives show as an empty field.
    pub fn monthly_amount_input(&self) -> String {
        input_text(self.monthly_amount)
    }

    pub fn duration_input(&self) -> String {
        input_text(self.duration)
    }

    /// Result line, shown only while the last calculation is positive.
    /// The month count reflects the duration field as it is now.
    pub fn result_line(&self) -> Option<String> {
        (self.total_saved > 0.0).then(|| {
            format!(
                "Total Savings After {} Month(s): {}",
                self.duration,
                format_ksh(self.total_saved)
            )
        })
    }
}

fn input_text(value: f64) -> String {
    if value > 0.0 {
        value.to_string()
    } else {
        String::new()
    }
}
