// src/db/seed.rs

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::auth::Account;
use crate::models::crm::{
    Gateway, Lead, LeadStatus, Meeting, MeetingStatus, MeetingType, PaymentType, Project,
    TeamMember, UserRole,
};
use crate::models::finance::{Platform, Sale, SalesMethod};

// Dados de demonstração reconstruídos a cada inicialização do processo.
// Não há armazenamento durável além do id de sessão.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub accounts: Vec<Account>,
    pub projects: Vec<Project>,
    pub users: Vec<TeamMember>,
    pub leads: Vec<Lead>,
    pub meetings: Vec<Meeting>,
    pub sales: Vec<Sale>,
    pub gateways: Vec<Gateway>,
    // Projeto ativo ao abrir a aplicação
    pub default_project_id: Uuid,
}

fn dia(ano: i32, mes: u32, dia: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(ano, mes, dia, 0, 0, 0)
        .single()
        .expect("data fixa de seed válida")
}

fn data(ano: i32, mes: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(ano, mes, d).expect("data fixa de seed válida")
}

pub fn demo() -> SeedData {
    // --- Projetos ---
    let p1 = Project {
        id: Uuid::new_v4(),
        nome: "Yuri Cerri - Web Start".to_string(),
        data_criacao: dia(2024, 1, 1),
    };
    let p2 = Project {
        id: Uuid::new_v4(),
        nome: "Empresa Tech Solutions".to_string(),
        data_criacao: dia(2024, 1, 15),
    };
    let p3 = Project {
        id: Uuid::new_v4(),
        nome: "Consultoria Premium".to_string(),
        data_criacao: dia(2024, 2, 1),
    };

    // --- Contas de login (senhas em texto plano, sistema de demonstração) ---
    let accounts = vec![
        Account {
            id: Uuid::new_v4(),
            email: "admin@crm.com".to_string(),
            password: "123456".to_string(),
            nome: "Yuri Cerri".to_string(),
            data_criacao: dia(2024, 1, 1),
            project_ids: vec![p1.id, p2.id, p3.id],
        },
        Account {
            id: Uuid::new_v4(),
            email: "vendas@crm.com".to_string(),
            password: "123456".to_string(),
            nome: "Equipe de Vendas".to_string(),
            data_criacao: dia(2024, 1, 10),
            project_ids: vec![p1.id],
        },
    ];

    // --- Equipe comercial ---
    let membro = |nome: &str, funcao: UserRole, project_id: Uuid| TeamMember {
        id: Uuid::new_v4(),
        nome: nome.to_string(),
        funcao,
        foto: None,
        project_id,
    };

    let carlos = membro("Carlos Silva", UserRole::Sdr, p1.id);
    let ana = membro("Ana Santos", UserRole::Sdr, p1.id);
    let pedro = membro("Pedro Costa", UserRole::Sdr, p1.id);
    let julia = membro("Julia Lima", UserRole::Closer, p1.id);
    let ricardo = membro("Ricardo Mendes", UserRole::Closer, p1.id);
    let mariana = membro("Mariana Souza", UserRole::Closer, p1.id);
    let lucas_sdr = membro("Lucas Oliveira", UserRole::Sdr, p2.id);
    let sofia = membro("Sofia Martins", UserRole::Closer, p2.id);
    let gabriel = membro("Gabriel Alves", UserRole::Sdr, p3.id);
    let isabela = membro("Isabela Costa", UserRole::Closer, p3.id);

    // --- Leads ---
    let lead_base = |nome: &str, telefone: &str, instagram: &str, sdr: Uuid, project_id: Uuid| Lead {
        id: Uuid::new_v4(),
        nome: nome.to_string(),
        telefone: telefone.to_string(),
        instagram: instagram.to_string(),
        email: None,
        sdr_responsavel: sdr,
        closer_responsavel: None,
        status: LeadStatus::Novo,
        valor_da_venda: None,
        tipo_pagamento: None,
        data_criacao: dia(2024, 1, 1),
        data_atualizacao: dia(2024, 1, 1),
        briefing: None,
        observacoes: None,
        project_id,
    };

    let joao = Lead {
        email: Some("joao@email.com".to_string()),
        closer_responsavel: Some(julia.id),
        status: LeadStatus::Venda,
        valor_da_venda: Some(Decimal::from(5000)),
        tipo_pagamento: Some(PaymentType::Pix),
        data_criacao: dia(2024, 1, 15),
        data_atualizacao: dia(2024, 1, 20),
        briefing: Some("Interessado em consultoria empresarial".to_string()),
        observacoes: Some("Cliente decidiu fechar o pacote premium".to_string()),
        ..lead_base("João Almeida", "(11) 98765-4321", "@joaoalmeida", carlos.id, p1.id)
    };
    let maria = Lead {
        status: LeadStatus::FollowUp,
        data_criacao: dia(2024, 1, 18),
        data_atualizacao: dia(2024, 1, 19),
        briefing: Some("Pediu mais informações sobre o serviço".to_string()),
        ..lead_base("Maria Oliveira", "(21) 99876-5432", "@mariaoliveira", ana.id, p1.id)
    };
    let lucas = Lead {
        closer_responsavel: Some(ricardo.id),
        status: LeadStatus::Remarcado,
        data_criacao: dia(2024, 1, 10),
        data_atualizacao: dia(2024, 1, 18),
        briefing: Some("Precisa de treinamento para equipe".to_string()),
        ..lead_base("Lucas Ferreira", "(31) 97654-3210", "@lucasferreira", carlos.id, p1.id)
    };
    let fernanda = Lead {
        data_criacao: dia(2024, 1, 22),
        data_atualizacao: dia(2024, 1, 22),
        briefing: Some("Lead capturado via Instagram".to_string()),
        ..lead_base("Fernanda Costa", "(41) 96543-2109", "@fernandacosta", pedro.id, p1.id)
    };
    let roberto = Lead {
        email: Some("roberto@email.com".to_string()),
        closer_responsavel: Some(julia.id),
        status: LeadStatus::Venda,
        valor_da_venda: Some(Decimal::from(3500)),
        tipo_pagamento: Some(PaymentType::Credito),
        data_criacao: dia(2024, 1, 12),
        data_atualizacao: dia(2024, 1, 16),
        briefing: Some("Empresa de médio porte, interessado em mentoria".to_string()),
        ..lead_base("Roberto Santos", "(51) 95432-1098", "@robertosantos", ana.id, p1.id)
    };
    let camila = Lead {
        status: LeadStatus::NoShow,
        data_criacao: dia(2024, 1, 14),
        data_atualizacao: dia(2024, 1, 17),
        briefing: Some("Não compareceu à reunião agendada".to_string()),
        ..lead_base("Camila Lima", "(61) 94321-0987", "@camila_lima", pedro.id, p1.id)
    };
    let andre = Lead {
        closer_responsavel: Some(mariana.id),
        status: LeadStatus::Venda,
        valor_da_venda: Some(Decimal::from(7500)),
        tipo_pagamento: Some(PaymentType::Pix),
        data_criacao: dia(2024, 1, 8),
        data_atualizacao: dia(2024, 1, 14),
        briefing: Some("Cliente corporativo premium".to_string()),
        ..lead_base("André Rocha", "(71) 93210-9876", "@andrerocha", carlos.id, p1.id)
    };
    let patricia = Lead {
        status: LeadStatus::Loss,
        data_criacao: dia(2024, 1, 11),
        data_atualizacao: dia(2024, 1, 15),
        briefing: Some("Não teve orçamento disponível".to_string()),
        ..lead_base("Patricia Martins", "(81) 92109-8765", "@patriciamartins", ana.id, p1.id)
    };
    let juliana = Lead {
        email: Some("juliana@email.com".to_string()),
        closer_responsavel: Some(julia.id),
        status: LeadStatus::Reembolsado,
        valor_da_venda: Some(Decimal::from(4000)),
        tipo_pagamento: Some(PaymentType::Credito),
        data_criacao: dia(2024, 1, 5),
        data_atualizacao: dia(2024, 1, 20),
        briefing: Some("Solicitou reembolso por motivos pessoais".to_string()),
        ..lead_base("Juliana Moreira", "(91) 90987-6543", "@julianamoreira", carlos.id, p1.id)
    };
    let beatriz = Lead {
        closer_responsavel: Some(mariana.id),
        status: LeadStatus::Venda,
        valor_da_venda: Some(Decimal::from(6000)),
        tipo_pagamento: Some(PaymentType::Boleto),
        data_criacao: dia(2024, 1, 9),
        data_atualizacao: dia(2024, 1, 18),
        briefing: Some("Cliente recorrente".to_string()),
        ..lead_base("Beatriz Carvalho", "(93) 98765-4321", "@beatrizcarvalho", pedro.id, p1.id)
    };
    let thiago = Lead {
        closer_responsavel: Some(sofia.id),
        status: LeadStatus::Venda,
        valor_da_venda: Some(Decimal::from(8000)),
        tipo_pagamento: Some(PaymentType::Pix),
        data_criacao: dia(2024, 2, 1),
        data_atualizacao: dia(2024, 2, 5),
        briefing: Some("Empresa de tecnologia".to_string()),
        ..lead_base("Thiago Pereira", "(11) 91234-5678", "@thiagopereira", lucas_sdr.id, p2.id)
    };
    let amanda = Lead {
        data_criacao: dia(2024, 2, 10),
        data_atualizacao: dia(2024, 2, 10),
        briefing: Some("Lead qualificado".to_string()),
        ..lead_base("Amanda Silva", "(21) 98765-1234", "@amandasilva", lucas_sdr.id, p2.id)
    };

    // --- Reuniões ---
    let meetings = vec![
        Meeting {
            id: Uuid::new_v4(),
            lead_id: lucas.id,
            data: data(2024, 1, 25),
            hora: "10:00".to_string(),
            sdr: carlos.id,
            closer: Some(ricardo.id),
            tipo: MeetingType::Fechamento,
            status: MeetingStatus::Marcado,
            observacoes: Some("Reunião remarcada a pedido do cliente".to_string()),
            project_id: p1.id,
        },
        Meeting {
            id: Uuid::new_v4(),
            lead_id: maria.id,
            data: data(2024, 1, 24),
            hora: "14:00".to_string(),
            sdr: ana.id,
            closer: None,
            tipo: MeetingType::Qualificacao,
            status: MeetingStatus::Marcado,
            observacoes: None,
            project_id: p1.id,
        },
        Meeting {
            id: Uuid::new_v4(),
            lead_id: camila.id,
            data: data(2024, 1, 17),
            hora: "11:00".to_string(),
            sdr: pedro.id,
            closer: None,
            tipo: MeetingType::Qualificacao,
            status: MeetingStatus::NoShow,
            observacoes: Some("Cliente não compareceu".to_string()),
            project_id: p1.id,
        },
        Meeting {
            id: Uuid::new_v4(),
            lead_id: amanda.id,
            data: data(2024, 2, 15),
            hora: "15:00".to_string(),
            sdr: lucas_sdr.id,
            closer: None,
            tipo: MeetingType::Qualificacao,
            status: MeetingStatus::Marcado,
            observacoes: None,
            project_id: p2.id,
        },
    ];

    // --- Gateways de pagamento ---
    let gateway = |nome: &str, taxa: Decimal, project_id: Uuid| Gateway {
        id: Uuid::new_v4(),
        nome: nome.to_string(),
        taxa_percentual: taxa,
        project_id,
    };

    let gateways = vec![
        gateway("PIX", Decimal::new(15, 1), p1.id),
        gateway("Zolt", Decimal::new(65, 1), p1.id),
        gateway("Kiwify", Decimal::new(99, 1), p1.id),
        gateway("Eduzz", Decimal::new(89, 1), p1.id),
        gateway("Yampi", Decimal::new(45, 1), p1.id),
        gateway("Asaas", Decimal::new(35, 1), p1.id),
        gateway("TMB", Decimal::ZERO, p1.id),
        gateway("Ombrelone", Decimal::ZERO, p1.id),
        gateway("Boleto", Decimal::new(35, 1), p1.id),
        gateway("Crédito", Decimal::new(499, 2), p1.id),
        gateway("DINHEIRO", Decimal::ZERO, p1.id),
        gateway("Depósito", Decimal::ZERO, p1.id),
        gateway("PIX", Decimal::new(15, 1), p2.id),
        gateway("Stripe", Decimal::new(59, 1), p2.id),
    ];

    // --- Vendas (campos derivados já fechados com a aritmética de comissão) ---
    let sales = vec![
        Sale {
            id: Uuid::new_v4(),
            lead_id: joao.id,
            closer_id: julia.id,
            sdr_id: carlos.id,
            valor_bruto: Decimal::from(5000),
            metodo_pagamento: SalesMethod::Pix,
            plataforma: None,
            taxa_percentual: Decimal::new(15, 1),
            taxa_valor: Decimal::from(75),
            valor_liquido: Decimal::from(4925),
            comissao_closer: Decimal::from(500),
            comissao_sdr: Decimal::from(250),
            data_venda: dia(2024, 1, 20),
            project_id: p1.id,
        },
        Sale {
            id: Uuid::new_v4(),
            lead_id: roberto.id,
            closer_id: julia.id,
            sdr_id: ana.id,
            valor_bruto: Decimal::from(3500),
            metodo_pagamento: SalesMethod::Credito,
            plataforma: Some(Platform::Kiwify),
            taxa_percentual: Decimal::new(99, 1),
            taxa_valor: Decimal::new(3465, 1),
            valor_liquido: Decimal::new(31535, 1),
            comissao_closer: Decimal::from(350),
            comissao_sdr: Decimal::from(175),
            data_venda: dia(2024, 1, 16),
            project_id: p1.id,
        },
        Sale {
            id: Uuid::new_v4(),
            lead_id: andre.id,
            closer_id: mariana.id,
            sdr_id: carlos.id,
            valor_bruto: Decimal::from(7500),
            metodo_pagamento: SalesMethod::Pix,
            plataforma: None,
            taxa_percentual: Decimal::new(15, 1),
            taxa_valor: Decimal::new(1125, 1),
            valor_liquido: Decimal::new(73875, 1),
            comissao_closer: Decimal::from(750),
            comissao_sdr: Decimal::from(375),
            data_venda: dia(2024, 1, 14),
            project_id: p1.id,
        },
        Sale {
            id: Uuid::new_v4(),
            lead_id: beatriz.id,
            closer_id: mariana.id,
            sdr_id: pedro.id,
            valor_bruto: Decimal::from(6000),
            metodo_pagamento: SalesMethod::Boleto,
            plataforma: Some(Platform::Asaas),
            taxa_percentual: Decimal::new(35, 1),
            taxa_valor: Decimal::from(210),
            valor_liquido: Decimal::from(5790),
            comissao_closer: Decimal::from(600),
            comissao_sdr: Decimal::from(300),
            data_venda: dia(2024, 1, 18),
            project_id: p1.id,
        },
        Sale {
            id: Uuid::new_v4(),
            lead_id: thiago.id,
            closer_id: sofia.id,
            sdr_id: lucas_sdr.id,
            valor_bruto: Decimal::from(8000),
            metodo_pagamento: SalesMethod::Pix,
            plataforma: None,
            taxa_percentual: Decimal::new(15, 1),
            taxa_valor: Decimal::from(120),
            valor_liquido: Decimal::from(7880),
            comissao_closer: Decimal::from(800),
            comissao_sdr: Decimal::from(400),
            data_venda: dia(2024, 2, 5),
            project_id: p2.id,
        },
    ];

    let default_project_id = p1.id;

    SeedData {
        accounts,
        projects: vec![p1, p2, p3],
        users: vec![
            carlos, ana, pedro, julia, ricardo, mariana, lucas_sdr, sofia, gabriel, isabela,
        ],
        leads: vec![
            joao, maria, lucas, fernanda, roberto, camila, andre, patricia, juliana, beatriz,
            thiago, amanda,
        ],
        meetings,
        sales,
        gateways,
        default_project_id,
    }
}
