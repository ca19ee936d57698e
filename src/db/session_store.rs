// src/db/session_store.rs

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::error::AppError;

// Equivalente ao localStorage do navegador: um arquivo JSON minúsculo
// guardando apenas o id da conta logada. Lido uma vez no boot,
// escrito no login/cadastro e apagado no logout.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    #[serde(rename = "currentUserId")]
    current_user_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    // Arquivo ausente ou corrompido nunca é erro: a sessão
    // simplesmente começa deslogada.
    pub fn load(&self) -> Option<Uuid> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(session) => Some(session.current_user_id),
            Err(e) => {
                tracing::warn!("Arquivo de sessão inválido, ignorando: {}", e);
                None
            }
        }
    }

    pub fn save(&self, user_id: Uuid) -> Result<(), AppError> {
        let session = PersistedSession {
            current_user_id: user_id,
        };
        let raw = serde_json::to_string(&session)
            .map_err(|e| anyhow::anyhow!("Falha ao serializar a sessão: {}", e))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn salva_e_recarrega_a_sessao() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let id = Uuid::new_v4();

        store.save(id).unwrap();
        assert_eq!(store.load(), Some(id));
    }

    #[test]
    fn arquivo_ausente_comeca_deslogado() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn arquivo_corrompido_comeca_deslogado() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(dir.path().join("session.json"), "não é json").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn clear_remove_o_arquivo_e_tolera_ausencia() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let id = Uuid::new_v4();

        store.save(id).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), None);

        // Segundo clear não deve falhar
        store.clear().unwrap();
    }
}
