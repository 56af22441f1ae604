use super::*;

pub static PT: Translations = Translations {
    meta: TranslationMeta {
        code: "pt",
        label: "PT",
        name: "Português",
    },
    navbar: NavbarTranslations {
        services: "Serviços",
        case_studies: "Estudos de Caso",
        process: "Processo",
        philosophy: "Filosofia",
        engagement: "Modelos",
        cta: "Agendar Descoberta",
        toggle_label: "EN",
    },
    hero: HeroTranslations {
        strap: "Parceiro Estratégico de Engenharia",
        headline: "A Engenharia da Sua Vantagem Injusta.",
        subheadline: "Arquitetamos plataformas SaaS críticas, soluções de IA empresarial, sistemas RAG e agentes autónomos que incorporam alavancagem no seu negócio. Quando falhar não é opção, somos a sua equipa de assalto.",
        primary_cta: "Agendar Sessão de Descoberta",
        secondary_cta: "Prova de Impacto",
        scroll_top: "Deslize",
        scroll_bottom: "Inicie o Briefing",
    },
    contact: ContactTranslations {
        dialog_title: "Vamos Construir o Próximo Passo.",
        dialog_description: "Tem um problema complexo? Interessa-nos. Vamos agendar uma chamada de descoberta de 30 minutos.",
        close_label: "Fechar janela",
        full_name: "Nome Completo*",
        work_email: "Email Profissional*",
        company: "Empresa*",
        challenge: "Qual é o seu principal desafio?*",
        challenge_placeholder: "Escolha uma opção",
        project: "Fale-nos do seu projeto (opcional)",
        submit: "Enviar",
        sending: "A enviar...",
        success: "Obrigado! Entraremos em contacto num dia útil.",
        fallback_error: "Não foi possível enviar a sua mensagem. Tente novamente.",
    },
    toast: ToastTranslations {
        notice: "AVISO",
        success: "SUCESSO",
        error: "ERRO",
        dismiss: "Fechar",
        sent_title: "Briefing recebido",
        failed_title: "Falha no envio",
    },
};
