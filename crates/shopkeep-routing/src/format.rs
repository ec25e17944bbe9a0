//! User-facing messages and item listings.

use shopkeep_core::{Item, Locale};

/// Fixed response texts for one locale.
///
/// `{budget}` and `{sizes}` are replaced when the message is rendered.
#[derive(Debug)]
pub struct Messages {
    /// Reply to an empty query
    pub empty_query: &'static str,
    /// Reply to a courteous query
    pub acknowledgment: &'static str,
    /// Header above the full catalog
    pub catalog_header: &'static str,
    /// Header above items within a budget
    pub budget_header: &'static str,
    /// Nothing fits the budget
    pub budget_empty: &'static str,
    /// Budget query without a usable amount
    pub budget_missing: &'static str,
    /// Header above items in the requested sizes
    pub size_header: &'static str,
    /// Nothing in the requested sizes
    pub size_empty: &'static str,
    /// Size query without a recognized size
    pub size_missing: &'static str,
    /// Header above search results
    pub search_header: &'static str,
    /// Search found nothing
    pub search_empty: &'static str,
    /// Greeting shown when a session starts
    pub greeting: &'static str,
    /// Label for the size column
    pub size_label: &'static str,
    /// Label for the color column
    pub color_label: &'static str,
    /// Label for the price column
    pub price_label: &'static str,
}

static ENGLISH: Messages = Messages {
    empty_query: "Please enter a message before sending.",
    acknowledgment: "Thank you! I'm here to help you with whatever you need.",
    catalog_header: "These are all the available products:",
    budget_header: "These are the products within your budget (${budget}):",
    budget_empty: "No products were found within your budget of ${budget}.",
    budget_missing: "Please provide a valid budget in your query. For example: 'Show me products for a price of no more than $500'.",
    size_header: "These are the products available in the requested sizes:",
    size_empty: "No products were found in the requested sizes: {sizes}.",
    size_missing: "Please specify a valid size (S, M, L, XL, etc.).",
    search_header: "Here are the products matching your search:",
    search_empty: "Sorry, I couldn't find any products matching your search.",
    greeting: "Hello! I'm your virtual assistant. How can I help you today?",
    size_label: "Size",
    color_label: "Color",
    price_label: "Price",
};

static SPANISH: Messages = Messages {
    empty_query: "Por favor, ingresa un mensaje antes de enviar.",
    acknowledgment: "¡Gracias! Estoy aquí para ayudarte con lo que necesites.",
    catalog_header: "Estos son todos los productos disponibles:",
    budget_header: "Estos son los productos que están dentro de tu presupuesto (${budget}):",
    budget_empty: "No se encontraron productos dentro de tu presupuesto de ${budget}.",
    budget_missing: "Por favor, proporciona un presupuesto válido en tu consulta. Por ejemplo: 'Mostrarme productos por un precio de no más de $500'.",
    size_header: "Estos son los productos disponibles en las tallas consultadas:",
    size_empty: "No se encontraron productos en las tallas mencionadas: {sizes}.",
    size_missing: "Por favor, especifica una talla válida (S, M, L, XL, etc.).",
    search_header: "Aquí tienes los productos que coinciden con tu búsqueda:",
    search_empty: "Lo siento, no encontré productos que coincidan con tu búsqueda.",
    greeting: "¡Hola! Soy tu asistente virtual. ¿En qué puedo ayudarte hoy?",
    size_label: "Talla",
    color_label: "Color",
    price_label: "Precio",
};

impl Messages {
    /// Messages for `locale`.
    pub fn for_locale(locale: Locale) -> &'static Self {
        match locale {
            Locale::English => &ENGLISH,
            Locale::Spanish => &SPANISH,
        }
    }
}

/// Renders items and parameterized messages.
#[derive(Debug, Clone, Copy)]
pub struct ResponseFormatter {
    messages: &'static Messages,
}

impl ResponseFormatter {
    /// Create a formatter for `locale`.
    pub fn new(locale: Locale) -> Self {
        Self {
            messages: Messages::for_locale(locale),
        }
    }

    /// Fixed messages of this formatter's locale.
    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    /// One listing line: `- {name} (Size: {size}, Color: {color}, Price: ${price})`.
    pub fn item_line(&self, item: &Item) -> String {
        format!(
            "- {} ({}: {}, {}: {}, {}: ${})",
            item.name,
            self.messages.size_label,
            item.size,
            self.messages.color_label,
            item.color,
            self.messages.price_label,
            format_amount(item.price)
        )
    }

    /// Header line followed by one line per item.
    pub fn listing<'item, I>(&self, header: &str, items: I) -> String
    where
        I: IntoIterator<Item = &'item Item>,
    {
        let mut response = format!("{header}\n");
        for item in items {
            response.push_str(&self.item_line(item));
            response.push('\n');
        }
        response
    }

    /// Header for items within `budget`.
    pub fn budget_header(&self, budget: f64) -> String {
        self.messages
            .budget_header
            .replace("{budget}", &format_amount(budget))
    }

    /// Message for a budget nothing fits.
    pub fn budget_empty(&self, budget: f64) -> String {
        self.messages
            .budget_empty
            .replace("{budget}", &format_amount(budget))
    }

    /// Message naming sizes that matched nothing.
    pub fn size_empty<'size, I>(&self, sizes: I) -> String
    where
        I: IntoIterator<Item = &'size String>,
    {
        let joined = sizes
            .into_iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        self.messages.size_empty.replace("{sizes}", &joined)
    }
}

/// Two-decimal rendering used for prices and budgets.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}
