use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    /// Template name. Names ending in `.html` are rendered with autoescaping.
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactTextTemplate("contact.txt"),
    ContactHtmlTemplate("contact.html"),
}

/// Plain text body of a contact form email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactTextTemplate(pub ContactTemplateData);

/// HTML body of a contact form email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactHtmlTemplate(pub ContactTemplateData);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactTemplateData {
    pub name: String,
    pub email: String,
    pub purpose: String,
    pub message: String,
}
