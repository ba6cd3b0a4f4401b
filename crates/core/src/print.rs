//! Printable HTML rendering of a meal plan.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::PrintConfig;
use crate::plan::{MealPlan, PlannedMeal};

const STYLESHEET: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; line-height: 1.6; }
h1 { color: #333; border-bottom: 2px solid #007AFF; padding-bottom: 8px; }
.meal { margin-bottom: 30px; page-break-inside: avoid; }
.day { font-weight: bold; color: #007AFF; font-size: 18px; }
.meal-image { width: 200px; height: 150px; object-fit: cover; border-radius: 8px; margin: 10px 0; }
.ingredients { margin: 10px 0; }
.instructions { margin: 10px 0; white-space: pre-wrap; }
@media print { body { margin: 0; } .meal-image { max-width: 150px; max-height: 112px; } }
footer { margin-top: 30px; text-align: center; color: #666; }";

/// Options for [`render_printable`].
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Name shown in the footer.
    pub brand: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            brand: "Whats for Supper".to_string(),
        }
    }
}

impl From<&PrintConfig> for PrintOptions {
    fn from(config: &PrintConfig) -> Self {
        Self {
            brand: config.brand.clone(),
        }
    }
}

/// Render a self-contained HTML document for printing.
pub fn render_printable(plan: &MealPlan, options: &PrintOptions) -> String {
    let restrictions = if plan.exclusions.is_empty() {
        String::new()
    } else {
        let joined: Vec<&str> = plan.exclusions.iter().collect();
        format!(
            "<p><strong>Dietary Restrictions:</strong> {}</p>\n",
            encode_text(&joined.join(", "))
        )
    };

    let meals: String = plan.entries.iter().map(render_entry).collect();

    format!(
        "<html>\n\
         <head>\n\
         <meta charset=\"utf-8\" />\n\
         <title>Meal Plan</title>\n\
         <style>\n{style}\n</style>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <p><strong>Generated:</strong> {date}</p>\n\
         {restrictions}\
         {meals}\
         <footer>Generated by {brand}</footer>\n\
         </body>\n\
         </html>\n",
        style = STYLESHEET,
        title = encode_text(&plan.title()),
        date = plan.generated_at.format("%Y-%m-%d"),
        restrictions = restrictions,
        meals = meals,
        brand = encode_text(&options.brand),
    )
}

fn render_entry(entry: &PlannedMeal) -> String {
    let meal = &entry.meal;
    let ingredients: String = meal
        .ingredients
        .ingredients()
        .map(|i| format!("<li>{}</li>", encode_text(&i.display_line())))
        .collect();

    format!(
        "<div class=\"meal\">\n\
         <div class=\"day\">{day}: {title}</div>\n\
         <p><strong>Category:</strong> {category} \u{2022} {area}</p>\n\
         <img src=\"{thumb}\" alt=\"{alt}\" class=\"meal-image\" />\n\
         <div class=\"ingredients\">\n\
         <strong>Ingredients:</strong>\n\
         <ul>{ingredients}</ul>\n\
         </div>\n\
         <div class=\"instructions\">\n\
         <strong>Instructions:</strong>\n\
         <p>{instructions}</p>\n\
         </div>\n\
         </div>\n",
        day = entry.day.as_str().to_uppercase(),
        title = encode_text(&meal.title),
        category = encode_text(&meal.category),
        area = encode_text(&meal.area),
        thumb = encode_double_quoted_attribute(&meal.thumbnail),
        alt = encode_double_quoted_attribute(&meal.title),
        ingredients = ingredients,
        instructions = encode_text(&meal.instructions),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquirer::Compliance;
    use crate::plan::Day;
    use crate::testing::fixtures;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn plan(owner: Option<&str>, exclusions: &[&str]) -> MealPlan {
        MealPlan {
            id: Uuid::new_v4(),
            owner: owner.map(str::to_string),
            generated_at: Utc.with_ymd_and_hms(2025, 3, 14, 18, 30, 0).unwrap(),
            exclusions: exclusions.iter().collect(),
            entries: vec![
                PlannedMeal {
                    day: Day::Monday,
                    meal: fixtures::veggie_stew(),
                    compliance: Compliance::Compliant,
                },
                PlannedMeal {
                    day: Day::Thursday,
                    meal: fixtures::beef_wellington(),
                    compliance: Compliance::Compliant,
                },
            ],
        }
    }

    #[test]
    fn test_document_layout() {
        let html = render_printable(&plan(Some("Alex"), &[]), &PrintOptions::default());

        assert!(html.contains("<h1>Alex's Meal Plan</h1>"));
        assert!(html.contains("<strong>Generated:</strong> 2025-03-14"));
        assert!(html.contains("<div class=\"day\">MONDAY: Veggie Stew</div>"));
        assert!(html.contains("<div class=\"day\">THURSDAY: Beef Wellington</div>"));
        assert!(html.contains("Vegetarian \u{2022} British"));
        assert!(html.contains("<li>500g Beef Fillet</li>"));
        assert!(html.contains("<footer>Generated by Whats for Supper</footer>"));
        assert!(!html.contains("Dietary Restrictions"));

        let monday = html.find("MONDAY").unwrap();
        let thursday = html.find("THURSDAY").unwrap();
        assert!(monday < thursday);
    }

    #[test]
    fn test_restrictions_line() {
        let html = render_printable(&plan(None, &["nuts", "dairy"]), &PrintOptions::default());
        assert!(html.contains("<h1>Your Meal Plan</h1>"));
        assert!(html.contains("<p><strong>Dietary Restrictions:</strong> dairy, nuts</p>"));
    }

    #[test]
    fn test_escapes_user_text() {
        let mut plan = plan(Some("<script>alert(1)</script>"), &[]);
        plan.entries[0].meal.title = "Mac & Cheese".to_string();
        plan.entries[0].meal.thumbnail = "x\" onerror=\"alert(1)".to_string();

        let html = render_printable(&plan, &PrintOptions::default());

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("MONDAY: Mac &amp; Cheese"));
        assert!(!html.contains("onerror=\"alert"));
    }

    #[test]
    fn test_custom_brand() {
        let options = PrintOptions {
            brand: "Family Kitchen".to_string(),
        };
        let html = render_printable(&plan(None, &[]), &options);
        assert!(html.contains("<footer>Generated by Family Kitchen</footer>"));
    }
}
