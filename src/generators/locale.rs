//! Natural-language wording of the generated artifacts

use clap::ValueEnum;

/// Gherkin dialect used for the scenario files and the matching step texts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    /// Brazilian Portuguese
    #[default]
    Pt,
    /// English
    En,
}

impl Locale {
    /// Language code written in the `#language:` header
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
        }
    }

    pub fn feature_keyword(&self) -> &'static str {
        match self {
            Locale::Pt => "Funcionalidade",
            Locale::En => "Feature",
        }
    }

    pub fn scenario_keyword(&self) -> &'static str {
        match self {
            Locale::Pt => "Cenário",
            Locale::En => "Scenario",
        }
    }

    pub fn given_keyword(&self) -> &'static str {
        match self {
            Locale::Pt => "Dado",
            Locale::En => "Given",
        }
    }

    pub fn when_keyword(&self) -> &'static str {
        match self {
            Locale::Pt => "Quando",
            Locale::En => "When",
        }
    }

    pub fn then_keyword(&self) -> &'static str {
        match self {
            Locale::Pt => "Então",
            Locale::En => "Then",
        }
    }

    /// Substitute for endpoints that have no URL
    pub fn missing_url(&self) -> &'static str {
        match self {
            Locale::Pt => "URL não especificada",
            Locale::En => "URL not specified",
        }
    }

    pub fn role_line(&self, name: &str) -> String {
        match self {
            Locale::Pt => format!("Como usuário com acesso ao Endpoint: {}", name),
            Locale::En => format!("As a user with access to the endpoint: {}", name),
        }
    }

    pub fn goal_line(&self, group: &str) -> String {
        match self {
            Locale::Pt => format!("Quero interagir com o {}", group),
            Locale::En => format!("I want to interact with {}", group),
        }
    }

    pub fn benefit_line(&self, name: &str) -> String {
        let action = name.to_lowercase();
        match self {
            Locale::Pt => format!("Para que eu possa {} com sucesso", action),
            Locale::En => format!("So that I can {} successfully", action),
        }
    }

    pub fn given_text(&self) -> String {
        match self {
            Locale::Pt => "que configurei a solicitação".to_string(),
            Locale::En => "the request is configured".to_string(),
        }
    }

    pub fn when_text(&self, method: &str, url: &str) -> String {
        match self {
            Locale::Pt => format!("envio uma solicitação {} para \"{}\"", method, url),
            Locale::En => format!("I send a {} request to \"{}\"", method, url),
        }
    }

    pub fn then_text(&self) -> String {
        match self {
            Locale::Pt => "recebo uma resposta válida".to_string(),
            Locale::En => "I receive a valid response".to_string(),
        }
    }

    /// First line of the docstring of a generated service method
    pub fn service_doc_summary(&self, method: &str, endpoint: &str) -> String {
        match self {
            Locale::Pt => format!(
                "Executa requisição {} para o endpoint {}",
                method.to_uppercase(),
                endpoint
            ),
            Locale::En => format!(
                "Sends a {} request to the {} endpoint",
                method.to_uppercase(),
                endpoint
            ),
        }
    }

    pub fn service_doc_payload(&self) -> &'static str {
        match self {
            Locale::Pt => "Dados da requisição (opcional)",
            Locale::En => "Request data (optional)",
        }
    }

    pub fn service_doc_raises(&self) -> &'static str {
        match self {
            Locale::Pt => "Se houver erro na requisição",
            Locale::En => "If the request fails",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_when_text_embeds_method_and_url() {
        assert_eq!(
            Locale::Pt.when_text("GET", "https://api.test/pets"),
            "envio uma solicitação GET para \"https://api.test/pets\""
        );
        assert_eq!(
            Locale::En.when_text("POST", "/pet"),
            "I send a POST request to \"/pet\""
        );
    }

    #[test]
    fn test_benefit_line_lowercases_name() {
        assert_eq!(
            Locale::Pt.benefit_line("List Pets"),
            "Para que eu possa list pets com sucesso"
        );
    }

    #[test]
    fn test_default_is_portuguese() {
        assert_eq!(Locale::default(), Locale::Pt);
        assert_eq!(Locale::default().code(), "pt");
    }
}
