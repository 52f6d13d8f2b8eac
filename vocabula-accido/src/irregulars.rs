//! Hand-authored tables for irregular and defective verbs.
//!
//! The irregular verbs (sum, possum, volo, nolo, malo, eo, fero, fio, edo,
//! inquam and friends) do not fit the suffix tables, so their paradigms are
//! written out here and substituted wholesale at construction time. Prefix
//! derivatives (absum, transeo, affero, ...) reuse the base table with the
//! prefix applied; where a derivative's perfect stem mutates (absum → afui,
//! affero → attuli) the mutated stem is part of the entry.
//!
//! The closed word lists at the bottom mark defective verbs: missing ppp,
//! missing perfect, active-only, impersonal, and so on. They are consulted
//! during regular generation and gate which blocks of the paradigm exist.

use crate::ending::{EndingKey, Endings, EndingValue};
use crate::tags::{Case, Mood, Number, Person, Tense, Voice};
use crate::verb::{
    decline_212, fill_six, finite, gerund_cells, perfect_system_active, perfect_system_passive,
    present_participle, supine_cells, SIX,
};

/// Look up the full replacement table for an irregular or fully defective
/// verb, keyed by its first principal part.
pub(crate) fn verb_endings(present: &str) -> Option<Endings> {
    match present {
        "sum" => Some(sum_like("", "fu")),
        "absum" => Some(sum_like("ab", "afu")),
        "adsum" => Some(sum_like("ad", "adfu")),
        "desum" => Some(sum_like("de", "defu")),
        "praesum" => Some(sum_like("prae", "praefu")),
        "supersum" => Some(sum_like("super", "superfu")),
        "intersum" => Some(sum_like("inter", "interfu")),
        "obsum" => Some(sum_like("ob", "obfu")),
        "possum" => Some(possum()),
        "volo" => Some(volo()),
        "nolo" => Some(nolo()),
        "malo" => Some(malo()),
        "fero" => Some(fero_like("", "tuli", "latus")),
        "affero" => Some(fero_like("af", "attuli", "allatus")),
        "aufero" => Some(fero_like("au", "abstuli", "ablatus")),
        "confero" => Some(fero_like("con", "contuli", "collatus")),
        "defero" => Some(fero_like("de", "detuli", "delatus")),
        "effero" => Some(fero_like("ef", "extuli", "elatus")),
        "infero" => Some(fero_like("in", "intuli", "illatus")),
        "offero" => Some(fero_like("of", "obtuli", "oblatus")),
        "perfero" => Some(fero_like("per", "pertuli", "perlatus")),
        "refero" => Some(fero_like("re", "rettuli", "relatus")),
        "transfero" => Some(fero_like("trans", "transtuli", "translatus")),
        "eo" => Some(eo_like("")),
        "abeo" => Some(eo_like("ab")),
        "adeo" => Some(eo_like("ad")),
        "exeo" => Some(eo_like("ex")),
        "ineo" => Some(eo_like("in")),
        "intereo" => Some(eo_like("inter")),
        "pereo" => Some(eo_like("per")),
        "redeo" => Some(eo_like("red")),
        "subeo" => Some(eo_like("sub")),
        "transeo" => Some(eo_like("trans")),
        "praetereo" => Some(eo_like("praeter")),
        "circumeo" => Some(eo_like("circum")),
        "fio" => Some(fio()),
        "edo" => Some(edo()),
        "inquam" => Some(inquam()),
        "memini" => Some(memini()),
        "odi" => Some(odi()),
        _ => None,
    }
}

fn six_str(
    endings: &mut Endings,
    tense: Tense,
    voice: Voice,
    mood: Mood,
    prefix: &str,
    forms: [&str; 6],
) {
    fill_six(
        endings,
        tense,
        voice,
        mood,
        forms.map(|form| format!("{prefix}{form}")),
    );
}

fn insert(endings: &mut Endings, key: EndingKey, form: String) {
    endings.insert(key, EndingValue::Single(form));
}

fn imperatives(
    endings: &mut Endings,
    voice: Voice,
    present: [Option<String>; 2],
    future: [Option<String>; 4],
) {
    let present_slots = [
        (Number::Singular, Person::Second),
        (Number::Plural, Person::Second),
    ];
    for ((number, person), form) in present_slots.into_iter().zip(present) {
        if let Some(form) = form {
            insert(
                endings,
                finite(Tense::Present, voice, Mood::Imperative, number, person),
                form,
            );
        }
    }
    let future_slots = [
        (Number::Singular, Person::Second),
        (Number::Singular, Person::Third),
        (Number::Plural, Person::Second),
        (Number::Plural, Person::Third),
    ];
    for ((number, person), form) in future_slots.into_iter().zip(future) {
        if let Some(form) = form {
            insert(
                endings,
                finite(Tense::Future, voice, Mood::Imperative, number, person),
                form,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// sum, esse, fui, futurus (and its prefixed derivatives)
// ---------------------------------------------------------------------------

fn sum_like(p: &str, perfect_stem: &str) -> Endings {
    use Mood::{Indicative, Subjunctive};
    use Tense::{Future, Imperfect, Present};
    use Voice::Active;

    let mut e = Endings::new();
    six_str(&mut e, Present, Active, Indicative, p, ["sum", "es", "est", "sumus", "estis", "sunt"]);
    six_str(&mut e, Imperfect, Active, Indicative, p, ["eram", "eras", "erat", "eramus", "eratis", "erant"]);
    six_str(&mut e, Future, Active, Indicative, p, ["ero", "eris", "erit", "erimus", "eritis", "erunt"]);
    six_str(&mut e, Present, Active, Subjunctive, p, ["sim", "sis", "sit", "simus", "sitis", "sint"]);
    six_str(&mut e, Imperfect, Active, Subjunctive, p, ["essem", "esses", "esset", "essemus", "essetis", "essent"]);
    imperatives(
        &mut e,
        Active,
        [Some(format!("{p}es")), Some(format!("{p}este"))],
        [
            Some(format!("{p}esto")),
            Some(format!("{p}esto")),
            Some(format!("{p}estote")),
            Some(format!("{p}sunto")),
        ],
    );
    insert(
        &mut e,
        EndingKey::Infinitive { tense: Present, voice: Active },
        format!("{p}esse"),
    );
    let fap = format!("{perfect_stem}tur");
    e.insert(
        EndingKey::Infinitive { tense: Future, voice: Active },
        EndingValue::multiple([format!("{fap}um esse"), format!("{p}fore")]),
    );
    decline_212(&mut e, Future, Active, &fap);
    perfect_system_active(&mut e, &format!("{perfect_stem}i"), perfect_stem);
    e
}

// ---------------------------------------------------------------------------
// possum, posse, potui
// ---------------------------------------------------------------------------

fn possum() -> Endings {
    use Mood::{Indicative, Subjunctive};
    use Tense::{Future, Imperfect, Present};
    use Voice::Active;

    let mut e = Endings::new();
    six_str(&mut e, Present, Active, Indicative, "", ["possum", "potes", "potest", "possumus", "potestis", "possunt"]);
    six_str(&mut e, Imperfect, Active, Indicative, "", ["poteram", "poteras", "poterat", "poteramus", "poteratis", "poterant"]);
    six_str(&mut e, Future, Active, Indicative, "", ["potero", "poteris", "poterit", "poterimus", "poteritis", "poterunt"]);
    six_str(&mut e, Present, Active, Subjunctive, "", ["possim", "possis", "possit", "possimus", "possitis", "possint"]);
    six_str(&mut e, Imperfect, Active, Subjunctive, "", ["possem", "posses", "posset", "possemus", "possetis", "possent"]);
    insert(&mut e, EndingKey::Infinitive { tense: Present, voice: Active }, "posse".into());
    perfect_system_active(&mut e, "potui", "potu");
    e
}

// ---------------------------------------------------------------------------
// volo / nolo / malo
// ---------------------------------------------------------------------------

fn volo() -> Endings {
    use Mood::{Indicative, Subjunctive};
    use Tense::{Future, Imperfect, Present};
    use Voice::Active;

    let mut e = Endings::new();
    six_str(&mut e, Present, Active, Indicative, "", ["volo", "vis", "vult", "volumus", "vultis", "volunt"]);
    six_str(&mut e, Imperfect, Active, Indicative, "", ["volebam", "volebas", "volebat", "volebamus", "volebatis", "volebant"]);
    six_str(&mut e, Future, Active, Indicative, "", ["volam", "voles", "volet", "volemus", "voletis", "volent"]);
    six_str(&mut e, Present, Active, Subjunctive, "", ["velim", "velis", "velit", "velimus", "velitis", "velint"]);
    six_str(&mut e, Imperfect, Active, Subjunctive, "", ["vellem", "velles", "vellet", "vellemus", "velletis", "vellent"]);
    insert(&mut e, EndingKey::Infinitive { tense: Present, voice: Active }, "velle".into());
    perfect_system_active(&mut e, "volui", "volu");
    present_participle(&mut e, "volens", "volent");
    e
}

fn nolo() -> Endings {
    use Mood::{Indicative, Subjunctive};
    use Tense::{Future, Imperfect, Present};
    use Voice::Active;

    let mut e = Endings::new();
    six_str(&mut e, Present, Active, Indicative, "", ["nolo", "non vis", "non vult", "nolumus", "non vultis", "nolunt"]);
    six_str(&mut e, Imperfect, Active, Indicative, "", ["nolebam", "nolebas", "nolebat", "nolebamus", "nolebatis", "nolebant"]);
    six_str(&mut e, Future, Active, Indicative, "", ["nolam", "noles", "nolet", "nolemus", "noletis", "nolent"]);
    six_str(&mut e, Present, Active, Subjunctive, "", ["nolim", "nolis", "nolit", "nolimus", "nolitis", "nolint"]);
    six_str(&mut e, Imperfect, Active, Subjunctive, "", ["nollem", "nolles", "nollet", "nollemus", "nolletis", "nollent"]);
    imperatives(
        &mut e,
        Active,
        [Some("noli".into()), Some("nolite".into())],
        [Some("nolito".into()), Some("nolito".into()), Some("nolitote".into()), Some("nolunto".into())],
    );
    insert(&mut e, EndingKey::Infinitive { tense: Present, voice: Active }, "nolle".into());
    perfect_system_active(&mut e, "nolui", "nolu");
    present_participle(&mut e, "nolens", "nolent");
    e
}

fn malo() -> Endings {
    use Mood::{Indicative, Subjunctive};
    use Tense::{Future, Imperfect, Present};
    use Voice::Active;

    let mut e = Endings::new();
    six_str(&mut e, Present, Active, Indicative, "", ["malo", "mavis", "mavult", "malumus", "mavultis", "malunt"]);
    six_str(&mut e, Imperfect, Active, Indicative, "", ["malebam", "malebas", "malebat", "malebamus", "malebatis", "malebant"]);
    six_str(&mut e, Future, Active, Indicative, "", ["malam", "males", "malet", "malemus", "maletis", "malent"]);
    six_str(&mut e, Present, Active, Subjunctive, "", ["malim", "malis", "malit", "malimus", "malitis", "malint"]);
    six_str(&mut e, Imperfect, Active, Subjunctive, "", ["mallem", "malles", "mallet", "mallemus", "malletis", "mallent"]);
    insert(&mut e, EndingKey::Infinitive { tense: Present, voice: Active }, "malle".into());
    perfect_system_active(&mut e, "malui", "malu");
    e
}

// ---------------------------------------------------------------------------
// fero, ferre, tuli, latus (and its prefixed derivatives)
// ---------------------------------------------------------------------------

fn fero_like(p: &str, perfect: &str, ppp: &str) -> Endings {
    use Mood::{Indicative, Subjunctive};
    use Tense::{Future, Imperfect, Present};
    use Voice::{Active, Passive};

    let mut e = Endings::new();
    six_str(&mut e, Present, Active, Indicative, p, ["fero", "fers", "fert", "ferimus", "fertis", "ferunt"]);
    six_str(&mut e, Imperfect, Active, Indicative, p, ["ferebam", "ferebas", "ferebat", "ferebamus", "ferebatis", "ferebant"]);
    six_str(&mut e, Future, Active, Indicative, p, ["feram", "feres", "feret", "feremus", "feretis", "ferent"]);
    six_str(&mut e, Present, Active, Subjunctive, p, ["feram", "feras", "ferat", "feramus", "feratis", "ferant"]);
    six_str(&mut e, Imperfect, Active, Subjunctive, p, ["ferrem", "ferres", "ferret", "ferremus", "ferretis", "ferrent"]);
    six_str(&mut e, Present, Passive, Indicative, p, ["feror", "ferris", "fertur", "ferimur", "ferimini", "feruntur"]);
    six_str(&mut e, Imperfect, Passive, Indicative, p, ["ferebar", "ferebaris", "ferebatur", "ferebamur", "ferebamini", "ferebantur"]);
    six_str(&mut e, Future, Passive, Indicative, p, ["ferar", "fereris", "feretur", "feremur", "feremini", "ferentur"]);
    six_str(&mut e, Present, Passive, Subjunctive, p, ["ferar", "feraris", "feratur", "feramur", "feramini", "ferantur"]);
    six_str(&mut e, Imperfect, Passive, Subjunctive, p, ["ferrer", "ferreris", "ferretur", "ferremur", "ferremini", "ferrentur"]);
    imperatives(
        &mut e,
        Active,
        [Some(format!("{p}fer")), Some(format!("{p}ferte"))],
        [
            Some(format!("{p}ferto")),
            Some(format!("{p}ferto")),
            Some(format!("{p}fertote")),
            Some(format!("{p}ferunto")),
        ],
    );
    imperatives(
        &mut e,
        Passive,
        [Some(format!("{p}ferre")), Some(format!("{p}ferimini"))],
        [
            Some(format!("{p}fertor")),
            Some(format!("{p}fertor")),
            None,
            Some(format!("{p}feruntor")),
        ],
    );
    insert(&mut e, EndingKey::Infinitive { tense: Present, voice: Active }, format!("{p}ferre"));
    insert(&mut e, EndingKey::Infinitive { tense: Present, voice: Passive }, format!("{p}ferri"));

    let ppp_stem = &ppp[..ppp.len() - 2];
    let fap = format!("{}r", &ppp[..ppp.len() - 1]);
    perfect_system_active(&mut e, perfect, &perfect[..perfect.len() - 1]);
    perfect_system_passive(&mut e, ppp);
    insert(
        &mut e,
        EndingKey::Infinitive { tense: Future, voice: Active },
        format!("{fap}us esse"),
    );

    present_participle(&mut e, &format!("{p}ferens"), &format!("{p}ferent"));
    decline_212(&mut e, Tense::Perfect, Passive, ppp_stem);
    decline_212(&mut e, Future, Active, &fap);
    decline_212(&mut e, Future, Passive, &format!("{p}ferend"));
    gerund_cells(&mut e, &format!("{p}ferend"));
    supine_cells(&mut e, ppp_stem);
    e
}

// ---------------------------------------------------------------------------
// eo, ire, ii, itus (and its prefixed derivatives)
// ---------------------------------------------------------------------------

fn eo_like(p: &str) -> Endings {
    use Mood::{Indicative, Subjunctive};
    use Tense::{Future, Imperfect, Perfect, Pluperfect, Present};
    use Voice::{Active, Passive};

    let mut e = Endings::new();
    six_str(&mut e, Present, Active, Indicative, p, ["eo", "is", "it", "imus", "itis", "eunt"]);
    six_str(&mut e, Imperfect, Active, Indicative, p, ["ibam", "ibas", "ibat", "ibamus", "ibatis", "ibant"]);
    six_str(&mut e, Future, Active, Indicative, p, ["ibo", "ibis", "ibit", "ibimus", "ibitis", "ibunt"]);
    six_str(&mut e, Present, Active, Subjunctive, p, ["eam", "eas", "eat", "eamus", "eatis", "eant"]);
    six_str(&mut e, Imperfect, Active, Subjunctive, p, ["irem", "ires", "iret", "iremus", "iretis", "irent"]);
    six_str(&mut e, Present, Passive, Indicative, p, ["eor", "iris", "itur", "imur", "imini", "euntur"]);
    six_str(&mut e, Imperfect, Passive, Indicative, p, ["ibar", "ibaris", "ibatur", "ibamur", "ibamini", "ibantur"]);
    six_str(&mut e, Future, Passive, Indicative, p, ["ibor", "iberis", "ibitur", "ibimur", "ibimini", "ibuntur"]);
    six_str(&mut e, Present, Passive, Subjunctive, p, ["ear", "earis", "eatur", "eamur", "eamini", "eantur"]);
    six_str(&mut e, Imperfect, Passive, Subjunctive, p, ["irer", "ireris", "iretur", "iremur", "iremini", "irentur"]);
    imperatives(
        &mut e,
        Active,
        [Some(format!("{p}i")), Some(format!("{p}ite"))],
        [
            Some(format!("{p}ito")),
            Some(format!("{p}ito")),
            Some(format!("{p}itote")),
            Some(format!("{p}eunto")),
        ],
    );
    insert(&mut e, EndingKey::Infinitive { tense: Present, voice: Active }, format!("{p}ire"));
    insert(&mut e, EndingKey::Infinitive { tense: Present, voice: Passive }, format!("{p}iri"));

    // Perfect system: regular from stem i-, except the syncopated 2nd
    // persons (isti, istis) and the isse- pluperfect subjunctive.
    perfect_system_active(&mut e, &format!("{p}ii"), &format!("{p}i"));
    six_str(&mut e, Perfect, Active, Indicative, p, ["ii", "isti", "iit", "iimus", "istis", "ierunt"]);
    six_str(&mut e, Pluperfect, Active, Subjunctive, p, ["issem", "isses", "isset", "issemus", "issetis", "issent"]);
    insert(&mut e, EndingKey::Infinitive { tense: Perfect, voice: Active }, format!("{p}isse"));
    perfect_system_passive(&mut e, &format!("{p}itus"));
    insert(
        &mut e,
        EndingKey::Infinitive { tense: Future, voice: Active },
        format!("{p}iturus esse"),
    );

    present_participle(&mut e, &format!("{p}iens"), &format!("{p}eunt"));
    decline_212(&mut e, Perfect, Passive, &format!("{p}it"));
    decline_212(&mut e, Future, Active, &format!("{p}itur"));
    decline_212(&mut e, Future, Passive, &format!("{p}eund"));
    gerund_cells(&mut e, &format!("{p}eund"));
    supine_cells(&mut e, &format!("{p}it"));
    e
}

// ---------------------------------------------------------------------------
// fio, fieri (suppletive passive of facio; defective on its own)
// ---------------------------------------------------------------------------

fn fio() -> Endings {
    use Mood::{Indicative, Subjunctive};
    use Tense::{Future, Imperfect, Present};
    use Voice::Active;

    let mut e = Endings::new();
    six_str(&mut e, Present, Active, Indicative, "", ["fio", "fis", "fit", "fimus", "fitis", "fiunt"]);
    six_str(&mut e, Imperfect, Active, Indicative, "", ["fiebam", "fiebas", "fiebat", "fiebamus", "fiebatis", "fiebant"]);
    six_str(&mut e, Future, Active, Indicative, "", ["fiam", "fies", "fiet", "fiemus", "fietis", "fient"]);
    six_str(&mut e, Present, Active, Subjunctive, "", ["fiam", "fias", "fiat", "fiamus", "fiatis", "fiant"]);
    six_str(&mut e, Imperfect, Active, Subjunctive, "", ["fierem", "fieres", "fieret", "fieremus", "fieretis", "fierent"]);
    imperatives(&mut e, Active, [Some("fi".into()), Some("fite".into())], [None, None, None, None]);
    insert(&mut e, EndingKey::Infinitive { tense: Present, voice: Active }, "fieri".into());
    e
}

// ---------------------------------------------------------------------------
// edo, esse/edere, edi, esus
// ---------------------------------------------------------------------------

fn edo() -> Endings {
    use Mood::{Indicative, Subjunctive};
    use Tense::{Future, Imperfect, Present};
    use Voice::{Active, Passive};

    let mut e = Endings::new();
    six_str(&mut e, Imperfect, Active, Indicative, "", ["edebam", "edebas", "edebat", "edebamus", "edebatis", "edebant"]);
    six_str(&mut e, Future, Active, Indicative, "", ["edam", "edes", "edet", "edemus", "edetis", "edent"]);
    six_str(&mut e, Present, Active, Subjunctive, "", ["edam", "edas", "edat", "edamus", "edatis", "edant"]);
    six_str(&mut e, Imperfect, Active, Subjunctive, "", ["ederem", "ederes", "ederet", "ederemus", "ederetis", "ederent"]);

    // The present indicative admits the athematic by-forms (es, est, estis).
    let present_forms: [EndingValue; 6] = [
        EndingValue::single("edo"),
        EndingValue::multiple(["edis", "es"]),
        EndingValue::multiple(["edit", "est"]),
        EndingValue::single("edimus"),
        EndingValue::multiple(["editis", "estis"]),
        EndingValue::single("edunt"),
    ];
    for ((number, person), value) in SIX.into_iter().zip(present_forms) {
        e.insert(finite(Present, Active, Indicative, number, person), value);
    }
    e.insert(
        finite(Present, Active, Mood::Imperative, Number::Singular, Person::Second),
        EndingValue::multiple(["ede", "es"]),
    );
    e.insert(
        finite(Present, Active, Mood::Imperative, Number::Plural, Person::Second),
        EndingValue::multiple(["edite", "este"]),
    );
    e.insert(
        EndingKey::Infinitive { tense: Present, voice: Active },
        EndingValue::multiple(["edere", "esse"]),
    );

    perfect_system_active(&mut e, "edi", "ed");
    perfect_system_passive(&mut e, "esus");
    present_participle(&mut e, "edens", "edent");
    decline_212(&mut e, Tense::Perfect, Passive, "es");
    decline_212(&mut e, Future, Active, "esur");
    decline_212(&mut e, Future, Passive, "edend");
    gerund_cells(&mut e, "edend");
    supine_cells(&mut e, "es");
    insert(
        &mut e,
        EndingKey::Infinitive { tense: Future, voice: Active },
        "esurus esse".into(),
    );
    e
}

// ---------------------------------------------------------------------------
// Fully defective verbs
// ---------------------------------------------------------------------------

fn inquam() -> Endings {
    use Mood::{Imperative, Indicative, Subjunctive};
    use Tense::{Future, Imperfect, Perfect, Present};
    use Voice::Active;

    let mut e = Endings::new();
    six_str(&mut e, Present, Active, Indicative, "", ["inquam", "inquis", "inquit", "inquimus", "inquitis", "inquint"]);
    insert(&mut e, finite(Imperfect, Active, Indicative, Number::Singular, Person::Third), "inquiebat".into());
    insert(&mut e, finite(Future, Active, Indicative, Number::Singular, Person::Second), "inquies".into());
    insert(&mut e, finite(Future, Active, Indicative, Number::Singular, Person::Third), "inquiet".into());
    insert(&mut e, finite(Perfect, Active, Indicative, Number::Singular, Person::First), "inquii".into());
    insert(&mut e, finite(Perfect, Active, Indicative, Number::Singular, Person::Second), "inquisti".into());
    insert(&mut e, finite(Perfect, Active, Indicative, Number::Singular, Person::Third), "inquit".into());
    insert(&mut e, finite(Perfect, Active, Subjunctive, Number::Singular, Person::Third), "inquiat".into());
    insert(&mut e, finite(Present, Active, Imperative, Number::Singular, Person::Second), "inque".into());
    e
}

/// memini has perfect morphology with present meaning, so its table shifts
/// each perfect-system block one tense earlier.
fn memini() -> Endings {
    use Mood::{Imperative, Indicative, Subjunctive};
    use Tense::{Future, Imperfect, Present};
    use Voice::Active;

    let mut e = Endings::new();
    six_str(&mut e, Present, Active, Indicative, "", ["memini", "meministi", "meminit", "meminimus", "meministis", "meminerunt"]);
    six_str(&mut e, Imperfect, Active, Indicative, "", ["memineram", "memineras", "meminerat", "memineramus", "memineratis", "meminerant"]);
    six_str(&mut e, Future, Active, Indicative, "", ["meminero", "memineris", "meminerit", "meminerimus", "memineritis", "meminerint"]);
    six_str(&mut e, Present, Active, Subjunctive, "", ["meminerim", "memineris", "meminerit", "meminerimus", "memineritis", "meminerint"]);
    six_str(&mut e, Imperfect, Active, Subjunctive, "", ["meminissem", "meminisses", "meminisset", "meminissemus", "meminissetis", "meminissent"]);
    insert(&mut e, finite(Future, Active, Imperative, Number::Singular, Person::Second), "memento".into());
    insert(&mut e, finite(Future, Active, Imperative, Number::Singular, Person::Third), "memento".into());
    insert(&mut e, finite(Future, Active, Imperative, Number::Plural, Person::Second), "mementote".into());
    insert(&mut e, EndingKey::Infinitive { tense: Present, voice: Active }, "meminisse".into());
    e
}

fn odi() -> Endings {
    use Mood::{Indicative, Subjunctive};
    use Tense::{Future, Imperfect, Present};
    use Voice::Active;

    let mut e = Endings::new();
    six_str(&mut e, Present, Active, Indicative, "", ["odi", "odisti", "odit", "odimus", "odistis", "oderunt"]);
    six_str(&mut e, Imperfect, Active, Indicative, "", ["oderam", "oderas", "oderat", "oderamus", "oderatis", "oderant"]);
    six_str(&mut e, Future, Active, Indicative, "", ["odero", "oderis", "oderit", "oderimus", "oderitis", "oderint"]);
    six_str(&mut e, Present, Active, Subjunctive, "", ["oderim", "oderis", "oderit", "oderimus", "oderitis", "oderint"]);
    six_str(&mut e, Imperfect, Active, Subjunctive, "", ["odissem", "odisses", "odisset", "odissemus", "odissetis", "odissent"]);
    insert(&mut e, EndingKey::Infinitive { tense: Present, voice: Active }, "odisse".into());
    insert(&mut e, EndingKey::Infinitive { tense: Future, voice: Active }, "osurus esse".into());
    decline_212(&mut e, Future, Active, "osur");
    e
}

// ---------------------------------------------------------------------------
// Defective-verb word lists
// ---------------------------------------------------------------------------

/// Verbs with no fourth principal part (no supine stem). Includes the
/// deponents whose third part lacks the `sum` auxiliary.
pub(crate) const MISSING_PPP_VERBS: &[&str] = &[
    "posco", "disco", "metuo", "timeo", "tremo", "compesco",
    "reminiscor", "vescor", "medeor",
];

/// Verbs with no perfect stem; a third principal part, when given, is the
/// fourth part.
pub(crate) const MISSING_PERFECT_VERBS: &[&str] = &["ferio", "maereo", "polleo"];

/// Verbs with no gerund or gerundive.
pub(crate) const MISSING_GERUND_VERBS: &[&str] = &["queo", "nequeo"];

/// Verbs whose supine stem exists but yields no future active participle.
pub(crate) const MISSING_FAP_VERBS: &[&str] = &["libet", "lubet"];

/// Verbs with no future or future-perfect forms.
pub(crate) const MISSING_FUTURE_VERBS: &[&str] = &["soleo", "adsoleo"];

/// Verbs whose fourth principal part is the future active participle
/// rather than a ppp (intransitives like careo, cariturus).
pub(crate) const FAP_FOURTHPP_VERBS: &[&str] = &["careo", "doleo", "valeo", "iaceo"];

/// Verbs with no passive voice at all.
pub(crate) const ACTIVE_ONLY_VERBS: &[&str] = &["vigeo", "caleo", "lateo", "pateo", "egeo"];

/// Impersonal verbs: only third-singular finite cells exist.
pub(crate) const IMPERSONAL_VERBS: &[&str] = &[
    "libet", "licet", "oportet", "decet", "pluit", "ningit", "taedet", "piget",
    "pudet", "miseret", "paenitet",
];

/// Verbs whose passive exists only impersonally (third singular).
pub(crate) const IMPERSONAL_PASSIVE_VERBS: &[&str] = &[
    "curro", "venio", "pugno", "dormio", "sto", "vivo",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::Gender;

    #[test]
    fn sum_table_has_no_passive() {
        let e = verb_endings("sum").unwrap();
        assert!(e.keys().all(|k| k.voice() != Some(Voice::Passive)));
        let key = finite(
            Tense::Present,
            Voice::Active,
            Mood::Indicative,
            Number::Plural,
            Person::First,
        );
        assert_eq!(e[&key].principal(), "sumus");
    }

    #[test]
    fn prefixed_sum_mutates_the_perfect_stem() {
        let e = verb_endings("absum").unwrap();
        let key = finite(
            Tense::Perfect,
            Voice::Active,
            Mood::Indicative,
            Number::Singular,
            Person::First,
        );
        assert_eq!(e[&key].principal(), "afui");
        let imp = finite(
            Tense::Imperfect,
            Voice::Active,
            Mood::Indicative,
            Number::Singular,
            Person::Third,
        );
        assert_eq!(e[&imp].principal(), "aberat");
    }

    #[test]
    fn fero_keeps_the_athematic_forms() {
        let e = verb_endings("fero").unwrap();
        let key = finite(
            Tense::Present,
            Voice::Active,
            Mood::Indicative,
            Number::Singular,
            Person::Second,
        );
        assert_eq!(e[&key].principal(), "fers");
        assert_eq!(
            e[&EndingKey::Infinitive { tense: Tense::Present, voice: Voice::Passive }].principal(),
            "ferri"
        );
    }

    #[test]
    fn affero_uses_suppletive_stems() {
        let e = verb_endings("affero").unwrap();
        let perfect = finite(
            Tense::Perfect,
            Voice::Active,
            Mood::Indicative,
            Number::Singular,
            Person::First,
        );
        assert_eq!(e[&perfect].principal(), "attuli");
        let ppp = EndingKey::Participle {
            tense: Tense::Perfect,
            voice: Voice::Passive,
            gender: Gender::Masculine,
            case: Case::Nominative,
            number: Number::Singular,
        };
        assert_eq!(e[&ppp].principal(), "allatus");
    }

    #[test]
    fn eo_syncopated_perfect() {
        let e = verb_endings("eo").unwrap();
        let key = finite(
            Tense::Perfect,
            Voice::Active,
            Mood::Indicative,
            Number::Singular,
            Person::Second,
        );
        assert_eq!(e[&key].principal(), "isti");
        let ptc = EndingKey::Participle {
            tense: Tense::Present,
            voice: Voice::Active,
            gender: Gender::Masculine,
            case: Case::Genitive,
            number: Number::Singular,
        };
        assert_eq!(e[&ptc].principal(), "euntis");
        assert_eq!(
            e[&EndingKey::Gerund { case: Case::Accusative }].principal(),
            "eundum"
        );
    }

    #[test]
    fn edo_lists_athematic_alternatives() {
        let e = verb_endings("edo").unwrap();
        let key = finite(
            Tense::Present,
            Voice::Active,
            Mood::Indicative,
            Number::Singular,
            Person::Second,
        );
        assert!(e[&key].contains("es"));
        assert_eq!(e[&key].principal(), "edis");
    }
}
