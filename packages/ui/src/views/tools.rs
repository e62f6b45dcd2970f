use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};

/// WHO adult BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn of(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// `weight / height²`, rounded to one decimal. `None` unless both inputs
/// are positive numbers.
pub fn bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if !(height_cm > 0.0 && weight_kg > 0.0) || !height_cm.is_finite() || !weight_kg.is_finite() {
        return None;
    }
    let meters = height_cm / 100.0;
    Some((weight_kg / (meters * meters) * 10.0).round() / 10.0)
}

/// Parse the two form fields and compute the BMI.
pub fn bmi_from_input(height: &str, weight: &str) -> Option<f64> {
    let height = height.trim().parse::<f64>().ok()?;
    let weight = weight.trim().parse::<f64>().ok()?;
    bmi(height, weight)
}

#[component]
pub fn ToolsView() -> Element {
    let mut height = use_signal(String::new);
    let mut weight = use_signal(String::new);
    let mut result = use_signal(|| Option::<f64>::None);

    let calculate = move |evt: FormEvent| {
        evt.prevent_default();
        result.set(bmi_from_input(&height(), &weight()));
    };

    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-3xl font-bold text-slate-800 dark:text-slate-200", "Health Tools" }
            div {
                class: "p-6 card-glassmorphism rounded-xl shadow-md max-w-lg",
                h2 { class: "text-2xl font-bold text-slate-800 dark:text-white", "BMI Calculator" }
                form {
                    class: "space-y-4 mt-4",
                    onsubmit: calculate,
                    div {
                        Label { r#for: "height", "Height (in cm)" }
                        Input {
                            id: "height",
                            r#type: "number",
                            value: height(),
                            oninput: move |evt: FormEvent| height.set(evt.value()),
                        }
                    }
                    div {
                        Label { r#for: "weight", "Weight (in kg)" }
                        Input {
                            id: "weight",
                            r#type: "number",
                            value: weight(),
                            oninput: move |evt: FormEvent| weight.set(evt.value()),
                        }
                    }
                    Button { variant: ButtonVariant::Primary, r#type: "submit", "Calculate" }
                }

                if let Some(value) = result() {
                    div {
                        class: "mt-6",
                        p { class: "text-lg text-slate-500 dark:text-slate-400", "Your BMI is:" }
                        p { class: "text-4xl font-bold text-indigo-600 dark:text-indigo-400", "{value:.1}" }
                        p { class: "text-slate-600 dark:text-slate-300 mt-1", "{BmiCategory::of(value).label()}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_one_decimal() {
        assert_eq!(bmi(175.0, 70.0), Some(22.9));
        assert_eq!(bmi(160.0, 50.0), Some(19.5));
        assert_eq!(bmi(180.0, 100.0), Some(30.9));
    }

    #[test]
    fn test_non_positive_inputs() {
        assert_eq!(bmi(0.0, 70.0), None);
        assert_eq!(bmi(175.0, -1.0), None);
        assert_eq!(bmi(f64::NAN, 70.0), None);
        assert_eq!(bmi_from_input("", "70"), None);
        assert_eq!(bmi_from_input("abc", "70"), None);
        assert_eq!(bmi_from_input(" 175 ", "70"), Some(22.9));
    }

    #[test]
    fn test_categories() {
        assert_eq!(BmiCategory::of(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::of(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::of(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::of(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::of(30.0), BmiCategory::Obese);
    }
}
