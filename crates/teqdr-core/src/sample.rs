//! Built-in demo content: three ECG records and a short chat transcript.

use crate::catalog::Record;
use crate::chat::ChatEntry;

const ECG1_INTERPRETATION: &str = r#"
    ## Normal Sinus Rhythm

    The ECG shows a **normal sinus rhythm** with a rate of 72 beats per minute.

    - PR interval within normal limits at 160ms
    - QRS complex duration normal at 88ms
    - QT/QTc intervals within normal range

    There are no significant ST segment or T wave abnormalities noted. The axis is normal.
    There are no signs of chamber enlargement or hypertrophy.

    **Overall:** this appears to be a normal ECG. This interpretation is preliminary and
    should be confirmed by a qualified healthcare professional.
"#;

const ECG2_INTERPRETATION: &str = r#"
    ## Atrial Fibrillation

    The ECG demonstrates **atrial fibrillation** with an irregular ventricular response.

    - Average ventricular rate approximately 110 beats per minute
    - Absence of distinct P waves, replaced by fibrillatory waves
    - Narrow QRS complexes measuring 90ms
    - No significant ST segment deviations or T wave abnormalities

    The axis appears normal.

    **Overall:** consistent with atrial fibrillation. Further clinical correlation and
    comparison with previous ECGs is recommended. Consider anticoagulation therapy based
    on the patient's risk factors.
"#;

const ECG3_INTERPRETATION: &str = r#"
    ## Left Bundle Branch Block (LBBB)

    The ECG shows a sinus rhythm with a rate of 78 beats per minute. The PR interval is
    slightly prolonged at 220ms. The QRS complexes are widened, measuring 140ms, which is
    consistent with a **left bundle branch block**.

    ### Characteristic features

    - QS or rS complex in V1
    - Broad, notched R waves in leads I, aVL, V5, and V6
    - Absent Q waves in leads I, V5, and V6
    - ST segment and T wave discordant to the QRS complex

    **Overall:** due to the presence of LBBB, assessment for myocardial ischemia is limited.
    Clinical correlation and comparison with previous ECGs is strongly recommended. Further
    cardiac evaluation may be necessary.
"#;

/// The demo records, in display order.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("ECG 1", "assets/images/ecg1.jpeg", ECG1_INTERPRETATION),
        Record::new("ECG 2", "assets/images/ecg2.jpeg", ECG2_INTERPRETATION),
        Record::new("ECG 3", "assets/images/ecg3.jpeg", ECG3_INTERPRETATION),
    ]
}

/// Static transcript shown when the chat panel first opens.
pub fn sample_transcript() -> Vec<ChatEntry> {
    vec![
        ChatEntry::new("Teqdr", "Would you like to make any changes?"),
        ChatEntry::new(
            "Dr Kabunga",
            "Yes. There are a few peculiarities to take account of.",
        ),
    ]
}
