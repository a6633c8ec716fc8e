//! The built-in template groups.
//!
//! Stop symbols are stored as typed in the editor, so a line break is the two
//! characters `\n`.

use super::model::{ActionPayload, Example, ParameterOverrides, Template, TemplateGroup};

const COMPANY_CLASSIFICATION: &str = "\
The following is a list of companies and the categories they fall into

Facebook: Social media, Technology
Uber: Transportation, Technology, Marketplace
Mcdonalds: Food, Fast Food, Logistics, Restaurants
{example}:";

const ALLITERATION_GENERATOR: &str = "\
Find synonyms for words that can create alliterations.

Sentence: The dog went to the store.
Alliteration: The dog drove to the department.

Sentence: David wears a hat everyday.
Alliteration: David dons a derby daily.

Sentence: The soap dries over night.
Alliteration: The soap shrivels succeeding sunset.

Sentence: {example}
Alliteration:";

const SONG_GENERATION: &str = "\
VERSE:
Alas my love,
You do me wrong,
To cast me off discourteously,
for i have loved you so long,
delighting in your company.

CHORDS:
Alas[Am] my[C] love,
you [G]do [Em]me wrong,
to [Am]cast me off dis[E]courteously,
for [Am]i have[C] loved[G] you [Em]so long,
de[Am]lighting in[E7] your [Am]company.

VERSE:
{example}

CHORDS:";

const SENTENCE_TO_EMAIL: &str = "\
```
Thank John for the book.\x20

````

Dear John,

Thank you so much for the book. I really appreciate it.\x20

I hope to hang out soon.\x20

Your friend,\x20

Sarah

###

Tell TechCorp I appreciate the great service.

````

To Whom it May Concern,\x20

I want you to know that I appreciate the great service at TechCorp.

The staff is outstanding and I enjoy every visit.\x20

Sincerely,\x20

Bill Johnson

###

Invoice Kelly Watkins $500 for design consultation.

````

Dear Ms. Watkins,\x20

This is my invoice for $500 for design consultation.\x20

It was a pleasure to work with you.\x20

Sincerely,\x20

Emily Fields

###

Invite Amanda and Paul to the company event Friday night.\x20

```
Dear Amanda and Paul,

I hope this finds you doing well.\x20

I want to invite you to our company event on Friday night.\x20

It will be a great opportunity for networking and there will be food and drinks.\x20

Should be fun.\x20

Best,\x20

Ryan

###

{example}

```
";

const BOOK_REVIEW: &str = "\
Title: Lovely War
Rating: 3/5
Quotes:
- \"It was time for James and Hazel to get properly acquainted. Time to see if the magic of music and moonlight and graceful movement were all that they had shared, or if a grimy gray London dawn and a cheap cup of coffee could make them feel the same way.\"
- \"Annihilation has its own je ne sais quoi. We’re all guilty of it. So spare me the sermons.\"
- \"His mother’s letters are full of urgent warning. She grew up in Mississippi.\x20
She knows about lynching. Aubrey wonders if he’ll die in his country before he\x20
ever gets the chance to die for his country. Either way, he’d rather not.\"
- \"Whatever boost sixty captured miles might have brought to German morale was\x20
erased by the chocolate in the BEF’s packs. War is morale. War is supply. War is\x20
chocolate.\"
Thoughts:
- Pacing felt awkward
- WW1 history felt accurate
- Didn't care too much for the story of the Gods
Review: A good book with well rounded characters, but the pacing felt super\x20
awkward. The titles of the chapters showed which Greek God was speaking, but I was more interested in the WW1 tales than their relationships.

'''
{example}
Review:";

const HEADLINE_GENERATION: &str = "\
Topic: Britain, coronavirus, beaches
Headline: Videos show crowded beaches in Britain

Topic: Apple, Big Sur, software
Headline: Apple promises faster software update installation with macOS Big Sur

Topic: Artic, climate change, satellite
Headline: A Satellite Lets Scientists See Antarctica’s Melting Like Never Before

Topic: {example}
Headline:";

const PRODUCT_NAME_GENERATOR: &str = "\
This is a product name generator. It takes a product's description and seed words, then outputs a list of potential product names.

Product description: A complete home gym that can fit in any apartment.
Seed words: intelligent, aspirational, luxury, futuristic
Product names: InfinityHome, Quantum, FlexFit, Flight, FutureFit

Product description: An affordable electric bike.
Seed words: Easy, eco-friendly, practical, dependable
Product names: Pegasus, Swifty, SunRunner, Wave, Amp

{example}
Product names:";

const RHYMING: &str = "\
```
A homophone is defined as a word that is pronounced the same as another word but\x20
differs in meaning.

Here is a list of homophones:
1. Accept/Except
2. Affect/Effect
3. Allude/Elude
4. Alter/Altar
5. A lot/Allot

Here's a list of homophones starting with the letter \"{example}\":
";

const REACT_COMPONENTS: &str = "\
import React from 'react';

const ThreeButtonComponent=()=>(";

const ANALOGIES_GENERATOR: &str = "Neural networks are like";

const IDEA_GENERATOR: &str = "\
Here is a list of 100 interesting ideas for new movie plots. Each plot is\x20
described with a title and a summary paragraph:

1. The Bird.\x20
A woman realizes that her pet bird is actually highly intelligent and able to communicate. The bird turns out to be a secret agent working for the CIA. The woman has to keep the bird's secret.

2.";

const TWEET_GENERATION: &str = "\
My favorite programming tweets:
-------
I asked @ilyasut how to set neural network init. He accidentally replied with a poem:
You want to be on the edge of chaos
Too small, and the init will be too stable, with vanishing gradients
Too large, and you'll be unstable, due to exploding gradients
You want to be on the edge
-------
I've been programming for 10 years now. Still feels like magic out of a fantasy: say the words exactly right, and watch your intent get carried out; say the words slightly wrong, and things go haywire. Feeling of wonder and joy hasn't faded one bit.
-------
Web programming is the science of coming up with increasingly complicated ways of concatenating strings.
-------
If you ever feel alone in this world, read your firewall logs. Problem solved :)
-------
Always wanted to travel back in time to try fighting a younger version of yourself? Software development is the career for you!
-------
After 17 years as a professional developer, it seems that the answer to every programming question is \"it depends\"
-------
";

pub(super) fn template_groups() -> Vec<TemplateGroup> {
    vec![
        TemplateGroup {
            name: "Multiple Examples".to_string(),
            templates: vec![
                template(
                    "company-classification",
                    "Company Classification",
                    0,
                    COMPANY_CLASSIFICATION,
                    &[
                        ("Unilever", "Consumer Goods, Food, Personal Care, Retail"),
                        ("LinkedIn", "Social Media, Technology, Business"),
                        ("FedEx", "Logistics, Transportation"),
                    ],
                    None,
                ),
                template(
                    "alliteration-generator",
                    "Alliteration Generator",
                    0,
                    ALLITERATION_GENERATOR,
                    &[
                        ("A person was running to the church.", ""),
                        ("A person cooked a great meal.", ""),
                    ],
                    None,
                ),
                template(
                    "song-generation",
                    "Song Generation",
                    0,
                    SONG_GENERATION,
                    &[
                        (
                            "My pangolin heart\nhas scales of bone\nblack and streaked with red\nhidden like a forgotten gem\nin the dusk",
                            "",
                        ),
                        (
                            "Country roads, take me home\nTo the place I belong\nWest Virginia, mountain mama\nTake me home, country roads",
                            "",
                        ),
                    ],
                    Some(&["\\n\\n"]),
                ),
                template(
                    "sentence-to-email",
                    "Sentence => Email",
                    0,
                    SENTENCE_TO_EMAIL,
                    &[("Ask RAM Co. if they have new storage units in stock.", "")],
                    Some(&["###"]),
                ),
                template(
                    "book-review",
                    "Book Review",
                    0,
                    BOOK_REVIEW,
                    &[
                        (
                            "Title: Goodbye, Things\nRating: 4/5\nThoughts:\n- very cleanly written\n- read easily\n- author did good research",
                            "",
                        ),
                        (
                            "Title: Deep Work: Rules for Focused Success in a Distracted World\nRating: 5/5\nThoughts:\n- Great read, got me to refocus my goals around my schedule.\n- Got me to delete a social media I used too much\n- I like that Cal Newport is a computer scientist as well",
                            "",
                        ),
                    ],
                    Some(&["\\n\\n"]),
                ),
                template(
                    "headline-generation",
                    "Headline Generation",
                    0,
                    HEADLINE_GENERATION,
                    &[("Chicago, restaurants, summer", "")],
                    None,
                ),
                template(
                    "product-name-generator",
                    "Product Name Generator",
                    0,
                    PRODUCT_NAME_GENERATOR,
                    &[(
                        "Product description: A zero carbohydrate cereal that tastes great.\nSeed words: fitness, healthy, keto, clean, tasty",
                        "",
                    )],
                    None,
                ),
                template(
                    "rhyming",
                    "Rhyming",
                    0,
                    RHYMING,
                    &[("b", "")],
                    Some(&[]),
                ),
            ],
        },
        TemplateGroup {
            name: "Creative".to_string(),
            templates: vec![
                template(
                    "react-components",
                    "React Components",
                    1,
                    REACT_COMPONENTS,
                    &[],
                    None,
                ),
                template(
                    "analogies-generator",
                    "Analogies Generator",
                    1,
                    ANALOGIES_GENERATOR,
                    &[],
                    Some(&["."]),
                ),
                template(
                    "idea-generator",
                    "Idea Generator",
                    1,
                    IDEA_GENERATOR,
                    &[],
                    Some(&["3"]),
                ),
                template(
                    "tweet-generation",
                    "Tweet Generation",
                    1,
                    TWEET_GENERATION,
                    &[],
                    Some(&["\\n-"]),
                ),
            ],
        },
    ]
}

fn template(
    id: &str,
    name: &str,
    tab_index: u32,
    prompt: &str,
    examples: &[(&str, &str)],
    stop_symbols: Option<&[&str]>,
) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        action_payload: ActionPayload {
            prompt: prompt.to_string(),
            examples: examples
                .iter()
                .map(|(text, output)| Example {
                    text: text.to_string(),
                    output: output.to_string(),
                })
                .collect(),
            tab_index,
            overrides: ParameterOverrides {
                stop_symbols: stop_symbols
                    .map(|symbols| symbols.iter().map(|s| s.to_string()).collect()),
                ..ParameterOverrides::default()
            },
        },
    }
}
