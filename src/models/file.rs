use std::fmt;

/// The six attachments of a document bundle, in multipart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Resume,
    EducationalCertificates,
    OfferLetters,
    PanCard,
    AadharCard,
    Form16OrItReturns,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 6] = [
        DocumentKind::Resume,
        DocumentKind::EducationalCertificates,
        DocumentKind::OfferLetters,
        DocumentKind::PanCard,
        DocumentKind::AadharCard,
        DocumentKind::Form16OrItReturns,
    ];

    /// Multipart field name expected by the backend.
    pub fn field_name(self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::EducationalCertificates => "educational_certificates",
            DocumentKind::OfferLetters => "offer_letters",
            DocumentKind::PanCard => "pan_card",
            DocumentKind::AadharCard => "aadhar_card",
            DocumentKind::Form16OrItReturns => "form_16_or_it_returns",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn mime_type(&self) -> &'static str {
        infer::get(&self.bytes)
            .map(|kind| kind.mime_type())
            .unwrap_or("application/octet-stream")
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentBundle {
    files: [Option<SelectedFile>; 6],
}

impl DocumentBundle {
    pub fn set(&mut self, kind: DocumentKind, file: Option<SelectedFile>) {
        self.files[Self::slot(kind)] = file;
    }

    pub fn get(&self, kind: DocumentKind) -> Option<&SelectedFile> {
        self.files[Self::slot(kind)].as_ref()
    }

    /// Every kind paired with its selection, missing ones included.
    pub fn entries(&self) -> impl Iterator<Item = (DocumentKind, Option<&SelectedFile>)> + '_ {
        DocumentKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    pub fn into_entries(self) -> impl Iterator<Item = (DocumentKind, Option<SelectedFile>)> {
        DocumentKind::ALL.into_iter().zip(self.files)
    }

    fn slot(kind: DocumentKind) -> usize {
        kind as usize
    }
}

/// Upload responses differ between the two routes, so the body is kept as is.
pub type UploadReceipt = serde_json::Value;
