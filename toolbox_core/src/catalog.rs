//! Directory of the app's tools, in landing-page order.

use crate::ToolDescriptor;

const TOOLS: &[(&str, &str, &str)] = &[
    (
        "qr-code",
        "QR Code Generator & Reader",
        "Generate QR codes and read them from files or your camera.",
    ),
    (
        "url-shortener",
        "URL Shortener",
        "Create short, manageable links from long URLs (mock service).",
    ),
    (
        "calculator",
        "Calculator",
        "Perform calculations with this versatile calculator.",
    ),
    (
        "unit-converter",
        "Unit Converter",
        "Convert units for length, weight, temperature, volume, and area.",
    ),
    (
        "currency-converter",
        "Currency Converter",
        "Convert currencies with (mock) real-time exchange rates.",
    ),
    (
        "quick-notes",
        "Quick Notes",
        "Jot down and save quick notes or snippets of text locally.",
    ),
    (
        "todo-list",
        "Grocery List",
        "Manage your shopping list with items, quantities, and prices.",
    ),
    (
        "classic-todo-list",
        "Classic To-Do List",
        "A simple and classic to-do list to manage your tasks.",
    ),
    (
        "password-generator",
        "Password Generator",
        "Create strong, random passwords for your accounts.",
    ),
    (
        "json-formatter",
        "JSON Formatter",
        "Format, validate, and beautify JSON data.",
    ),
    (
        "case-converter",
        "Case Converter",
        "Convert text between UPPERCASE, lowercase, Title Case, etc.",
    ),
    (
        "text-diff",
        "Text Difference Checker",
        "Compare two texts and highlight their differences.",
    ),
    (
        "color-picker",
        "Color Picker",
        "Select colors and get HEX, RGB, HSL values.",
    ),
];

/// Every tool in the directory.
#[must_use]
pub fn tool_catalog() -> Vec<ToolDescriptor> {
    TOOLS
        .iter()
        .map(|(id, title, description)| ToolDescriptor::new(*id, *title, *description))
        .collect()
}

/// Look up a single tool by id.
#[must_use]
pub fn find_tool(id: &str) -> Option<ToolDescriptor> {
    TOOLS
        .iter()
        .find(|(tool_id, _, _)| *tool_id == id)
        .map(|(id, title, description)| ToolDescriptor::new(*id, *title, *description))
}
