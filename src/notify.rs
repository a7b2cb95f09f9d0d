//! 検索・エクスポートの通知メッセージ

use crate::error::NmSearchError;
use crate::export::ExportFormat;

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    SearchCompleted { query: String, count: usize },
    SearchFailed { reason: String },
    NothingSelected,
    Exported { count: usize, format: ExportFormat },
}

impl Notification {
    /// 検索コマンドのエラーを通知に変換
    pub fn from_error(err: &NmSearchError) -> Self {
        match err {
            NmSearchError::NothingSelected => Notification::NothingSelected,
            other => Notification::SearchFailed {
                reason: other.to_string(),
            },
        }
    }

    /// 失敗系の通知か
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notification::SearchFailed { .. } | Notification::NothingSelected
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            Notification::SearchCompleted { .. } => "Busca concluída",
            Notification::SearchFailed { .. } => "Erro na busca",
            Notification::NothingSelected => "Nenhum item selecionado",
            Notification::Exported { .. } => "Exportação realizada",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notification::SearchCompleted { query, count } => {
                format!("Encontrados {} resultados para \"{}\"", count, query)
            }
            Notification::SearchFailed { reason } => format!(
                "Ocorreu um erro ao realizar a busca. Tente novamente. ({})",
                reason
            ),
            Notification::NothingSelected => {
                "Selecione pelo menos um resultado para exportar.".to_string()
            }
            Notification::Exported { count, format } => {
                format!("{} itens exportados em formato {}.", count, format)
            }
        }
    }

    /// 標準出力（失敗は標準エラー）に表示
    pub fn emit(&self) {
        if self.is_error() {
            eprintln!("✖ {}: {}", self.title(), self.description());
        } else {
            println!("✔ {}: {}", self.title(), self.description());
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_completed_message() {
        let n = Notification::SearchCompleted {
            query: "bomba".to_string(),
            count: 5,
        };
        assert_eq!(
            n.to_string(),
            "Busca concluída: Encontrados 5 resultados para \"bomba\""
        );
        assert!(!n.is_error());
    }

    #[test]
    fn test_exported_message_uses_upper_tag() {
        let n = Notification::Exported {
            count: 2,
            format: ExportFormat::Csv,
        };
        assert_eq!(n.description(), "2 itens exportados em formato CSV.");
    }

    #[test]
    fn test_error_notifications() {
        assert!(Notification::NothingSelected.is_error());
        assert!(Notification::SearchFailed {
            reason: "x".to_string()
        }
        .is_error());
    }

    #[test]
    fn test_from_error() {
        let n = Notification::from_error(&NmSearchError::EmptyQuery);
        assert!(n.is_error());
        assert_eq!(
            n,
            Notification::SearchFailed {
                reason: "Digite um termo de busca".to_string()
            }
        );
        assert!(n.to_string().starts_with("Erro na busca: "));

        let n = Notification::from_error(&NmSearchError::Interaction("cancelado".to_string()));
        assert!(n.description().contains("Erro de interação: cancelado"));

        assert_eq!(
            Notification::from_error(&NmSearchError::NothingSelected),
            Notification::NothingSelected
        );
    }
}
