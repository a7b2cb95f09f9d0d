use thiserror::Error;

#[derive(Error, Debug)]
pub enum NmSearchError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Formato de catálogo não suportado: {0} (use .json ou .xlsx)")]
    UnsupportedCatalogFormat(String),

    #[error("Erro ao ler planilha: {0}")]
    Spreadsheet(String),

    #[error("Catálogo inválido: {0}")]
    InvalidCatalog(String),

    #[error("Digite um termo de busca")]
    EmptyQuery,

    #[error("Nenhum item selecionado. Selecione pelo menos um resultado para exportar.")]
    NothingSelected,

    #[error("Limite inválido: {0}. Use 5, 10, 15 ou 20")]
    InvalidLimit(usize),

    #[error("Erro de interação: {0}")]
    Interaction(String),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] nm_search_common::Error),
}

pub type Result<T> = std::result::Result<T, NmSearchError>;
