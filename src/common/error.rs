use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Esta conta já tem acesso ao projeto")]
    AccessAlreadyGranted,

    #[error("Não é possível remover o último projeto")]
    LastProject,

    #[error("Lead não encontrado")]
    LeadNotFound,

    #[error("SDR responsável inválido para este projeto")]
    InvalidSdr,

    #[error("Closer responsável inválido para este projeto")]
    InvalidCloser,

    // Variante para falhas de leitura/escrita do arquivo de sessão
    #[error("Erro de armazenamento da sessão: {0}")]
    StorageError(#[from] std::io::Error),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno")]
    Internal(#[from] anyhow::Error),
}
