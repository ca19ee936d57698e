// src/services/auth.rs

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::SessionStore,
    models::auth::{Account, LoginPayload, SignupPayload},
};

// Dono da identidade autenticada. Autentica contra a lista de contas
// em memória e persiste apenas o id da sessão via SessionStore.
// Construído uma vez no boot da aplicação e injetado nos componentes.
#[derive(Debug)]
pub struct AuthService {
    accounts: Vec<Account>,
    current_user_id: Option<Uuid>,
    session: SessionStore,
}

impl AuthService {
    pub fn new(accounts: Vec<Account>, session: SessionStore) -> Self {
        Self {
            accounts,
            current_user_id: None,
            session,
        }
    }

    // Retoma a sessão persistida, se o id ainda resolver para uma conta
    // conhecida. Id obsoleto começa deslogado, sem erro.
    pub fn resume_session(&mut self) {
        if let Some(saved_id) = self.session.load() {
            if let Some(account) = self.accounts.iter().find(|acc| acc.id == saved_id) {
                tracing::info!("Sessão retomada para {}", account.email);
                self.current_user_id = Some(saved_id);
            } else {
                tracing::warn!("Sessão persistida não resolve para nenhuma conta, ignorando");
            }
        }
    }

    // Login por comparação exata de e-mail e senha (texto plano: este
    // sistema não tem autenticação real). Em caso de falha, nenhum
    // estado é alterado.
    pub fn login(&mut self, payload: &LoginPayload) -> Result<(), AppError> {
        payload.validate()?;

        let account = self
            .accounts
            .iter()
            .find(|acc| acc.email == payload.email && acc.password == payload.password)
            .ok_or(AppError::InvalidCredentials)?;

        let account_id = account.id;
        self.session.save(account_id)?;
        self.current_user_id = Some(account_id);
        Ok(())
    }

    // Cadastro: falha se o e-mail já estiver registrado; senão cria a
    // conta com `project_ids` vazio e já a deixa logada.
    pub fn signup(&mut self, payload: SignupPayload) -> Result<Uuid, AppError> {
        payload.validate()?;

        if self.accounts.iter().any(|acc| acc.email == payload.email) {
            return Err(AppError::EmailAlreadyExists);
        }

        let account = Account {
            id: Uuid::new_v4(),
            email: payload.email,
            password: payload.password,
            nome: payload.nome,
            data_criacao: Utc::now(),
            project_ids: Vec::new(),
        };
        let account_id = account.id;

        self.session.save(account_id)?;
        self.accounts.push(account);
        self.current_user_id = Some(account_id);
        Ok(account_id)
    }

    pub fn logout(&mut self) -> Result<(), AppError> {
        self.current_user_id = None;
        self.session.clear()
    }

    pub fn current_user(&self) -> Option<&Account> {
        let id = self.current_user_id?;
        self.accounts.iter().find(|acc| acc.id == id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user_id.is_some()
    }

    // =========================================================================
    //  ACESSO A PROJETOS (tela de compartilhamento)
    // =========================================================================

    pub fn accounts_with_access(&self, project_id: Uuid) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|acc| acc.project_ids.contains(&project_id))
            .collect()
    }

    pub fn grant_project_access(&mut self, email: &str, project_id: Uuid) -> Result<(), AppError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|acc| acc.email == email)
            .ok_or(AppError::UserNotFound)?;

        if account.project_ids.contains(&project_id) {
            return Err(AppError::AccessAlreadyGranted);
        }

        account.project_ids.push(project_id);
        Ok(())
    }

    pub fn revoke_project_access(
        &mut self,
        account_id: Uuid,
        project_id: Uuid,
    ) -> Result<(), AppError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|acc| acc.id == account_id)
            .ok_or(AppError::UserNotFound)?;

        account.project_ids.retain(|id| *id != project_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn conta(email: &str, senha: &str) -> Account {
        Account {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password: senha.to_string(),
            nome: "Conta de Teste".to_string(),
            data_criacao: Utc::now(),
            project_ids: Vec::new(),
        }
    }

    fn servico(accounts: Vec<Account>) -> (AuthService, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionStore::new(dir.path().join("session.json"));
        (AuthService::new(accounts, session), dir)
    }

    fn login_de(email: &str, senha: &str) -> LoginPayload {
        LoginPayload {
            email: email.to_string(),
            password: senha.to_string(),
        }
    }

    #[test]
    fn login_exige_par_exato_de_credenciais() {
        let (mut auth, _dir) = servico(vec![conta("demo@crm.com", "123456")]);

        assert!(matches!(
            auth.login(&login_de("demo@crm.com", "senha-errada")),
            Err(AppError::InvalidCredentials)
        ));
        assert!(!auth.is_authenticated());

        auth.login(&login_de("demo@crm.com", "123456")).unwrap();
        assert!(auth.is_authenticated());
        assert_eq!(auth.current_user().unwrap().email, "demo@crm.com");
    }

    #[test]
    fn falha_de_login_nao_altera_estado() {
        let (mut auth, _dir) = servico(vec![conta("demo@crm.com", "123456")]);

        let _ = auth.login(&login_de("outro@crm.com", "123456"));
        assert!(!auth.is_authenticated());
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn signup_rejeita_email_duplicado() {
        let (mut auth, _dir) = servico(vec![conta("demo@crm.com", "123456")]);

        let result = auth.signup(SignupPayload {
            email: "demo@crm.com".to_string(),
            password: "abcdef".to_string(),
            nome: "Outra Pessoa".to_string(),
        });
        assert!(matches!(result, Err(AppError::EmailAlreadyExists)));
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn signup_cria_conta_sem_projetos_e_loga() {
        let (mut auth, _dir) = servico(Vec::new());

        let id = auth
            .signup(SignupPayload {
                email: "nova@crm.com".to_string(),
                password: "abcdef".to_string(),
                nome: "Nova Conta".to_string(),
            })
            .unwrap();

        assert!(auth.is_authenticated());
        let user = auth.current_user().unwrap();
        assert_eq!(user.id, id);
        assert!(user.project_ids.is_empty());
    }

    #[test]
    fn sessao_sobrevive_ao_reboot_do_servico() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionStore::new(dir.path().join("session.json"));
        let contas = vec![conta("demo@crm.com", "123456")];

        let mut auth = AuthService::new(contas.clone(), session.clone());
        auth.login(&login_de("demo@crm.com", "123456")).unwrap();

        // Novo processo: mesmo arquivo de sessão, mesmas contas
        let mut auth2 = AuthService::new(contas, session);
        auth2.resume_session();
        assert!(auth2.is_authenticated());
    }

    #[test]
    fn sessao_obsoleta_comeca_deslogada() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionStore::new(dir.path().join("session.json"));
        session.save(Uuid::new_v4()).unwrap();

        let mut auth = AuthService::new(vec![conta("demo@crm.com", "123456")], session);
        auth.resume_session();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn logout_limpa_identidade_e_arquivo() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionStore::new(dir.path().join("session.json"));
        let mut auth = AuthService::new(vec![conta("demo@crm.com", "123456")], session.clone());

        auth.login(&login_de("demo@crm.com", "123456")).unwrap();
        auth.logout().unwrap();

        assert!(!auth.is_authenticated());
        assert_eq!(session.load(), None);
    }

    #[test]
    fn conceder_e_revogar_acesso_a_projeto() {
        let (mut auth, _dir) = servico(vec![conta("demo@crm.com", "123456")]);
        let project_id = Uuid::new_v4();

        assert!(matches!(
            auth.grant_project_access("ninguem@crm.com", project_id),
            Err(AppError::UserNotFound)
        ));

        auth.grant_project_access("demo@crm.com", project_id).unwrap();
        assert_eq!(auth.accounts_with_access(project_id).len(), 1);

        // Conceder de novo é erro
        assert!(matches!(
            auth.grant_project_access("demo@crm.com", project_id),
            Err(AppError::AccessAlreadyGranted)
        ));

        let account_id = auth.accounts_with_access(project_id)[0].id;
        auth.revoke_project_access(account_id, project_id).unwrap();
        assert!(auth.accounts_with_access(project_id).is_empty());
    }
}
