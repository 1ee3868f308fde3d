use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: i64,
    pub customer_id: i64,
    pub doctor_id: i64,
    #[serde(default)]
    pub appointment_id: Option<i64>,
    pub diagnosis: String,
    #[serde(default)]
    pub symptoms: Option<String>,
    #[serde(default)]
    pub treatment: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Create / update body for `/medical-records`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecordInput {
    pub customer_id: i64,
    pub doctor_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<i64>,
    pub diagnosis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&MedicalRecord> for MedicalRecordInput {
    fn from(r: &MedicalRecord) -> Self {
        Self {
            customer_id: r.customer_id,
            doctor_id: r.doctor_id,
            appointment_id: r.appointment_id,
            diagnosis: r.diagnosis.clone(),
            symptoms: r.symptoms.clone(),
            treatment: r.treatment.clone(),
            notes: r.notes.clone(),
        }
    }
}

/// Entry of the medication catalogue used by the prescription lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub form: Option<String>,
    #[serde(default)]
    pub strength: Option<String>,
}

impl Medication {
    /// "Amoxicillin 500mg (capsule)"
    pub fn label(&self) -> String {
        let mut out = self.name.clone();
        if let Some(strength) = &self.strength {
            out.push(' ');
            out.push_str(strength);
        }
        if let Some(form) = &self.form {
            out.push_str(&format!(" ({form})"));
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: i64,
    pub customer_id: i64,
    pub doctor_id: i64,
    #[serde(default)]
    pub medical_record_id: Option<i64>,
    pub medication_id: i64,
    #[serde(default)]
    pub medication_name: Option<String>,
    pub dosage: String,
    pub frequency: String,
    pub duration_days: u32,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionInput {
    pub customer_id: i64,
    pub doctor_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_record_id: Option<i64>,
    pub medication_id: i64,
    pub dosage: String,
    pub frequency: String,
    pub duration_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl From<&Prescription> for PrescriptionInput {
    fn from(p: &Prescription) -> Self {
        Self {
            customer_id: p.customer_id,
            doctor_id: p.doctor_id,
            medical_record_id: p.medical_record_id,
            medication_id: p.medication_id,
            dosage: p.dosage.clone(),
            frequency: p.frequency.clone(),
            duration_days: p.duration_days,
            instructions: p.instructions.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabTestStatus {
    #[default]
    Ordered,
    InProgress,
    Completed,
    Cancelled,
}

impl LabTestStatus {
    pub const ALL: [LabTestStatus; 4] = [
        LabTestStatus::Ordered,
        LabTestStatus::InProgress,
        LabTestStatus::Completed,
        LabTestStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabTestStatus::Ordered => "ordered",
            LabTestStatus::InProgress => "in_progress",
            LabTestStatus::Completed => "completed",
            LabTestStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LabTestStatus::Ordered => "Ordered",
            LabTestStatus::InProgress => "In progress",
            LabTestStatus::Completed => "Completed",
            LabTestStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabTest {
    pub id: i64,
    pub customer_id: i64,
    pub doctor_id: i64,
    pub test_type_id: i64,
    #[serde(default)]
    pub test_type_name: Option<String>,
    #[serde(default)]
    pub status: LabTestStatus,
    #[serde(default)]
    pub ordered_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabTestInput {
    pub customer_id: i64,
    pub doctor_id: i64,
    pub test_type_id: i64,
    pub status: LabTestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&LabTest> for LabTestInput {
    fn from(t: &LabTest) -> Self {
        Self {
            customer_id: t.customer_id,
            doctor_id: t.doctor_id,
            test_type_id: t.test_type_id,
            status: t.status,
            result: t.result.clone(),
            notes: t.notes.clone(),
        }
    }
}

/// Orderable lab test from `/lab-test-types`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabTestType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub price_cents: Option<i64>,
}
