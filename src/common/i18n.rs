// src/common/i18n.rs

use std::collections::HashMap;

pub const DEFAULT_LOCALE: &str = "en";

const EN: &[(&str, &str)] = &[
    ("error.validation", "One or more fields are invalid."),
    ("error.email_in_use", "This e-mail is already in use."),
    ("error.invalid_credentials", "Invalid e-mail or password."),
    ("error.invalid_token", "Invalid or missing authentication token."),
    ("error.user_not_found", "User not found."),
    ("error.store_not_found", "Store not found."),
    ("error.store_forbidden", "You do not have access to this store."),
    ("error.store_not_empty", "Make sure you removed all products and categories first."),
    ("error.billboard_not_found", "Billboard not found."),
    ("error.category_not_found", "Category not found."),
    ("error.size_not_found", "Size not found."),
    ("error.color_not_found", "Color not found."),
    ("error.product_not_found", "Product not found."),
    ("error.order_not_found", "Order not found."),
    ("error.billboard_in_use", "Make sure you removed all categories using this billboard first."),
    ("error.category_in_use", "Make sure you removed all products using this category first."),
    ("error.size_in_use", "Make sure you removed all products using this size first."),
    ("error.color_in_use", "Make sure you removed all products using this color first."),
    ("error.product_in_use", "This product is part of existing orders."),
    ("error.order_already_paid", "This order has already been paid."),
    ("error.internal", "Something went wrong."),
];

const PT: &[(&str, &str)] = &[
    ("error.validation", "Um ou mais campos são inválidos."),
    ("error.email_in_use", "Este e-mail já está em uso."),
    ("error.invalid_credentials", "E-mail ou senha inválidos."),
    ("error.invalid_token", "Token de autenticação inválido ou ausente."),
    ("error.user_not_found", "Usuário não encontrado."),
    ("error.store_not_found", "Loja não encontrada."),
    ("error.store_forbidden", "Você não tem acesso a esta loja."),
    ("error.store_not_empty", "Remova todos os produtos e categorias antes."),
    ("error.billboard_not_found", "Banner não encontrado."),
    ("error.category_not_found", "Categoria não encontrada."),
    ("error.size_not_found", "Tamanho não encontrado."),
    ("error.color_not_found", "Cor não encontrada."),
    ("error.product_not_found", "Produto não encontrado."),
    ("error.order_not_found", "Pedido não encontrado."),
    ("error.billboard_in_use", "Remova todas as categorias que usam este banner antes."),
    ("error.category_in_use", "Remova todos os produtos desta categoria antes."),
    ("error.size_in_use", "Remova todos os produtos com este tamanho antes."),
    ("error.color_in_use", "Remova todos os produtos com esta cor antes."),
    ("error.product_in_use", "Este produto faz parte de pedidos existentes."),
    ("error.order_already_paid", "Este pedido já foi pago."),
    ("error.internal", "Ocorreu um erro inesperado."),
];

/// Catálogo de mensagens por idioma, montado uma vez na inicialização.
#[derive(Debug, Clone)]
pub struct I18nStore {
    catalogs: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl I18nStore {
    pub fn new() -> Self {
        let mut catalogs = HashMap::new();
        catalogs.insert("en", EN.iter().copied().collect());
        catalogs.insert("pt", PT.iter().copied().collect());
        Self { catalogs }
    }

    /// Idioma desconhecido cai no inglês; chave desconhecida volta como está.
    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.catalogs
            .get(lang)
            .and_then(|catalog| catalog.get(key))
            .or_else(|| {
                self.catalogs
                    .get(DEFAULT_LOCALE)
                    .and_then(|catalog| catalog.get(key))
            })
            .map(|message| message.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let store = I18nStore::new();
        assert_eq!(store.translate("de", "error.store_not_found"), "Store not found.");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let store = I18nStore::new();
        assert_eq!(store.translate("pt", "error.nope"), "error.nope");
    }

    #[test]
    fn catalogs_cover_the_same_keys() {
        let en: Vec<_> = EN.iter().map(|(k, _)| *k).collect();
        let pt: Vec<_> = PT.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, pt);
    }
}
