//! Topic exclusions. A match anywhere in the article means it is off-topic,
//! whatever road or accident vocabulary it also carries.
//!
//! Patterns are written against normalized text (lowercase, no accents).

pub const NEGATIVE_PATTERNS: &[(&str, &[&str])] = &[
    (
        "financial_investment",
        &[
            r"\binvestiment[io]\s+(?:finanziari?|immobiliari?|pubblic[io]|privati?|europei?|nazionali?)",
            r"\binvestiment[io]\s+(?:in|per|da|di)\s+",
            r"\b(?:piano|programma|progetto)\s+di\s+investiment[io]",
            r"\b(?:milioni?|miliardi?)\s+(?:di\s+)?euro\s+(?:di\s+)?investiment[io]",
            r"\binvestiment[io]\s+(?:da|di)\s+\d+",
            r"\b(?:finanziamento|finanziare|finanziari?)\s+(?:pubblic[io]|privati?|europei?)",
            r"\b(?:borsa|mercato|azionari?|titoli?)\s+(?:di\s+)?investiment[io]",
            r"\b(?:fondo|fondi)\s+(?:di\s+)?investiment[io]",
            r"\b(?:rendimento|dividendo|capitale)\s+(?:di\s+)?investiment[io]",
            r"\b(?:investire|investito|investono)\s+(?:in|su|per)\s+(?:progetti?|infrastrutture|edilizia)",
            r"\b(?:investimento|investimenti)\s+(?:pubblic[io]|privati?)\s+(?:in|per|su)",
        ],
    ),
    (
        "figurative_incident",
        &[r"\bincidente\s+(?:diplomatic[io]|politic[io]|amministrativ[io])"],
    ),
    (
        "gender_violence",
        &[
            r"\b(?:violenza|maltrattamenti?)\s+(?:di\s+)?genere",
            r"\b(?:vittime?|percorso|assistenza)\s+(?:di\s+)?violenza",
            r"\b(?:centro|centri)\s+(?:antiviolenza|anti-violenza)",
            r"\b(?:codice\s+rosso)\s+(?:violenza|genere)",
            r"\b(?:giornata|giornata internazionale)\s+(?:per|contro)\s+(?:l'?eliminazione\s+della\s+)?violenza",
            r"\b(?:percorso|percorsi)\s+(?:assistenzial[ie]|dedicat[io])\s+(?:alle\s+)?vittime",
            r"\b(?:violenza|abuso|maltrattamento)\s+(?:domestica|familiare|sulle\s+donne)",
        ],
    ),
    (
        "sports",
        &[
            r"\b(?:basket|calcio|sport|partita|gara)\s+",
            r"\b(?:flying\s+disc|squadra.*?qualificazione|serie\s+[abc])\s+",
            r"\b(?:campionato\s+italiano|storica\s+qualificazione)",
            r"\b(?:basket.*?arriva|arriva.*?massafra|lotteria\s+play-off)",
            r"\b(?:campionato.*?tregua|pausa\s+pasquale.*?campionato)",
            r"\b(?:granoro\s+corato|appuntamento\s+con\s+la\s+storia)",
            r"\b(?:visione\s+dei\s+film|pubblicita\s+concede\s+fiato)",
        ],
    ),
    (
        "elections",
        &[r"\b(?:elezioni?|votazioni?|referendum|ballottaggio)"],
    ),
    (
        "events",
        &[r"\b(?:festival|evento|manifestazione|sagra)"],
    ),
    (
        "public_projects",
        &[r"\b(?:progetto|progetti)\s+(?:ospedal[ie]|sanitari?|edilizi?)"],
    ),
    (
        "resident_complaints",
        &[
            r"\b(?:invivibile|insopportabile|esasperazione)\s+(?:per|a causa di|dovuto a)\s+(?:traffico|mezzi pesanti|rumore)",
            r"\b(?:residenti?|abitanti?)\s+(?:lamentano|scrivono|protestano|denunciano)",
            r"\b(?:tangenziale|strada)\s+(?:sotto casa|invivibile|insopportabile)",
        ],
    ),
    (
        "road_safety_works",
        &[
            r"\b(?:interventi?|miglioramenti?|lavori?)\s+(?:sulla|sulle|per)\s+(?:segnaletica|sicurezza stradale|illuminazione)",
            r"\b(?:migliorare|miglioramento)\s+(?:la\s+)?sicurezza\s+stradale",
            r"\b(?:piano|piani)\s+(?:di|per)\s+(?:sicurezza|prevenzione)",
        ],
    ),
    (
        "scams",
        &[
            r"\b(?:si\s+finge|finge\s+di|fals[io])\s+(?:carabiniere|poliziotto|avvocato)",
            r"\b(?:truffa|truffatore|truffatric[ie]|estorcere|estorsione)",
            r"\b(?:presunti|falsi)\s+(?:incidenti?|sinistri?)\s+(?:che\s+coinvolgono|che\s+coinvolgerebbero)",
        ],
    ),
    (
        "waste",
        &[
            r"\b(?:rifiuti?|abbandono)\s+(?:sulle|sulla|sugli)\s+strade",
            r"\b(?:piano|piani)\s+(?:straordinari?|di\s+contrasto)\s+(?:all'?|al)\s+abbandono",
            r"\b(?:citta\s+metropolitana|comune)\s+(?:contro|piano)\s+(?:rifiuti|abbandono)",
            r"\b(?:rifiuti\s+speciali|pneumatici\s+abbandonati|centinaia\s+di\s+pneumatici)",
            r"\b(?:abbandonat[io]\s+(?:in\s+fretta|di\s+notte|sulla|sulle))\s+(?:strade?|corato)",
            r"\b(?:pneumatici\s+usati|facilmente\s+recuperabili)",
            r"\b(?:testo\s+unico.*?materia\s+ambientale|dlgs.*?n\.\s+\d+)",
        ],
    ),
    (
        "religious_processions",
        &[
            r"\b(?:busto|reliquie?|effigi?|simulacro|patrono)\s+(?:argenteo|sfilato|processione)",
            r"\b(?:processione|sfilata)\s+(?:religiosa|storica|tradizionale)",
            r"\b(?:festa|feste)\s+(?:patronale|religiosa)",
        ],
    ),
    (
        "firefighter_roundups",
        &[
            r"\b(?:vigili\s+del\s+fuoco|vigile)\s+(?:in\s+prima\s+linea|attivita\s+di\s+soccorso|sempre\s+operativi)",
            r"\b(?:estate|periodo)\s+(?:di\s+fuoco|intensa\s+attivita)",
            r"\b(?:non\s+solo\s+fiamme|incendi\s+e\s+incidenti)\s+(?:ma|ma\s+anche)",
        ],
    ),
    (
        "interviews",
        &[
            r"\b(?:contro|sdegno|ricordo|incubo)\s+(?:i\s+video|quello\s+che|quello\s+che\s+ho)",
            r"\b(?:video|foto)\s+(?:che\s+riprendono|del\s+dolore|condiviso)",
            r"\b(?:e\s+accaduto\s+anche\s+a\s+me|ho\s+vissuto|prov[ao]\s+sdegno)",
            r"\b(?:parlare|parla|intervista)\s+(?:e|di|su)\s+(?:un|una)\s+(?:ferit[io]|vittima)",
        ],
    ),
    (
        "prevention_without_incident",
        &[r"\b(?:sicurezza\s+stradale|prevenzione)\s+(?:senza|non)\s+(?:incidente|sinistro)"],
    ),
    (
        "railway",
        &[
            r"\b(?:incidente|disastro|tragedia)\s+ferroviari[io]",
            r"\b(?:ferroviari[io]|treno|stazione)\s+(?:incidente|disastro|tragedia)",
            r"\b(?:tratta|linea)\s+(?:corato|andria|bari).*?(?:incidente|disastro)",
            r"\b(?:ferrotramviaria|stazione\s+centrale).*?(?:incidente|disastro)",
            r"\b(?:travolto|travolta)\s+(?:da\s+un\s+treno|da\s+un\s+convoglio)",
            r"\b(?:inseguit[ao]\s+sulle\s+rotaie|sulle\s+rotaie.*?inseguit[ao])",
            r"\b(?:finanziere|poliziotto|carabiniere)\s+(?:travolto|travolta)\s+(?:da\s+un\s+treno)",
        ],
    ),
    (
        "commemorations",
        &[
            r"\b(?:ricordo|memoria|anniversario|commemorazione)\s+(?:del|dell'|dello|di)\s+(?:incidente|disastro|tragedia)",
            r"\b(?:corona\s+di\s+fiori|momento\s+di\s+raccoglimento)\s+(?:in\s+ricordo|per)",
            r"\b(?:nono|ottavo|settimo|sesto)\s+anniversario\s+(?:del|dell'|dello)\s+(?:incidente|disastro)",
            r"\b(?:familiari\s+delle\s+vittime|vittime\s+del)\s+(?:incidente|disastro)",
            r"\b(?:fa\s+memoria|fare\s+memoria|custodia\s+della\s+memoria)",
        ],
    ),
    (
        "advertising",
        &[
            r"\b(?:noleggio|noleggiare)\s+(?:a\s+lungo\s+termine|auto|veicoli)",
            r"\b(?:migliori\s+offerte|offerte\s+di|soluzione\s+del\s+noleggio)",
            r"\b(?:alla\s+scoperta\s+delle|innovazione\s+tecnologica)\s+auto",
            r"\b(?:mercato\s+auto|autovetture|veicoli\s+moderni)\s+(?:smart|sicure)",
            r"\b(?:sistemi\s+di\s+infotainment|dispositivi\s+adas|assistenza\s+alla\s+guida)",
            r"\b(?:costo\s+fisso|bilancio.*?veicolo|mobilita\s+senza\s+pensieri)",
        ],
    ),
    (
        "crime",
        &[
            r"\b(?:tentat[io]|tentato)\s+omicidi[io]",
            r"\b(?:omicidi[io]|agguato|in\s+carcere)\s+(?:in|a)",
            r"\b(?:ordinanza\s+di\s+custodia|indagat[ie]|procura)\s+",
            r"\b(?:marito\s+e\s+moglie|indagate.*?persone)",
        ],
    ),
    (
        "domestic_accidents",
        &[
            r"\b(?:incidenti?\s+domestici?|ambiente\s+domestico)",
            r"\b(?:istat.*?incidenti?\s+domestici?|dati\s+istat.*?incidenti?)",
        ],
    ),
    (
        "natural_deaths",
        &[
            r"\b(?:papa|pontefice)\s+(?:francesco|ha\s+lasciat[io]|funerali)",
            r"\b(?:corteo\s+funebre|spoglie\s+mortali|sepolt[io])\s+",
            r"\b(?:santa\s+maria\s+maggiore|vescovo.*?dopo\s+la\s+morte)",
            r"\b(?:in\s+memoria\s+del|ricordo\s+dell')\s+(?:senatore|onorevole|deputato)",
            r"\b(?:anniversario\s+della\s+scomparsa|scomparsa\s+del)",
            r"\b(?:stroncat[ao]\s+da\s+un\s+infarto|mort[ao]\s+per\s+infarto)",
            r"\b(?:infarto.*?anni|mort[ao].*?studio.*?roma)",
            r"\b(?:lezioni\s+di\s+democrazia|azione\s+politica\s+e\s+parlamentare)",
        ],
    ),
    (
        "politics",
        &[
            r"\b(?:scontro|contesa)\s+(?:politic[io]|elettoral[ie]|campagna\s+elettorale)",
            r"\b(?:campagna\s+elettorale|manifesto\s+elettorale|consigliere\s+comunale)",
            r"\b(?:candidat[io]\s+(?:regionale|comunale)|gruppo\s+politico|polis\s+contro)",
            r"\b(?:udc|presenta.*?campagna\s+elettorale|campagna\s+di\s+comunicazione)",
            r"\b(?:candidato\s+(?:alla\s+)?(?:provincia|comune|regione))",
            r"\b(?:marketing\s+elettorale|responsabile.*?marketing|portale.*?udc)",
            r"\b(?:sub\s+commissario\s+sezionale|tavolo\s+dei\s+relatori)",
        ],
    ),
    (
        "council_clashes",
        &[
            r"\b(?:scontro\s+in\s+consiglio|scontri\s+in\s+consiglio)",
            r"\b(?:scontro\s+verbale.*?consiglio|consiglio\s+comunale.*?scontro)",
            r"\b(?:presidente\s+del\s+consiglio\s+comunale|consigliere.*?consigliera)",
            r"\b(?:gestire.*?spegnere.*?scontro|stigmatizzare.*?parole.*?consigliere)",
            r"\b(?:ruolo\s+istituzionale.*?consiglio|prerogative.*?consiglio\s+comunale)",
        ],
    ),
    (
        "roundabout_works",
        &[
            r"\b(?:nuova\s+rotatoria|rotatoria\s+sulla|realizzazione\s+di\s+una\s+rotatoria)",
            r"\b(?:consiglio\s+metropolitano|decreto\s+d'urgenza|disciplinare\s+di\s+finanziamento)",
            r"\b(?:all'incrocio.*?non\s+dove\s+si\s+verificano|dove\s+si\s+verificano\s+gli\s+incidenti)",
        ],
    ),
    (
        "traffic_ordinances",
        &[
            r"\b(?:nuovi\s+sensi\s+unici|divieti\s+di\s+fermata|variazioni\s+alla\s+viabilita)",
            r"\b(?:ordinanza.*?polizia\s+locale|comandante.*?polizia\s+locale.*?ordinanza)",
            r"\b(?:stalli\s+di\s+sosta|senso\s+unico\s+di\s+marcia|viabilita\s+cittadina)",
            r"\b(?:senso\s+unico|sensi\s+unici)\s+(?:per|di|sulla)\s+(?:via|strada)",
            r"\b(?:parte\s+(?:oggi|ufficialmente|ieri))\s+(?:il|la)\s+(?:senso\s+unico|sperimentazione)",
            r"\b(?:sperimentazione|ordinanza)\s+(?:che\s+vedra|che\s+prevede)\s+(?:via|strada)",
            r"\b(?:modifica\s+dei\s+sensi\s+di\s+marcia|sensi\s+di\s+marcia)",
            r"\b(?:ordinanza.*?prevede.*?modifica|ordinanza.*?senso\s+unico)",
            r"\b(?:primo\s+giorno\s+con\s+il\s+senso\s+unico|scattata.*?ordinanza)",
            r"\b(?:percorribile\s+esclusivamente|direzione\s+che\s+conduce)",
            r"\b(?:intersezione\s+con\s+viale|variazioni\s+alla\s+segnaletica)",
        ],
    ),
    (
        "historical_events",
        &[
            r"\b(?:disfida\s+di\s+barletta|anni\s+dalla\s+disfida|cavalieri\s+italiani)",
            r"\b(?:campo\s+di\s+battaglia|sfida\s+passata\s+alla\s+storia|evento\s+storico)",
            r"\b(?:donne\s+e\s+uomini.*?resistenza|resistenza.*?corato)",
            r"\b(?:storia\s+cittadina.*?resistenza|trilogia.*?fascismo)",
            r"\b(?:fascismo.*?citta|resistenza.*?storia)",
            r"\b(?:lotta.*?popolo\s+italiano|concittadini.*?storia)",
            r"\b(?:ultimo\s+lavoro.*?storia|volume.*?resistenza)",
            r"\b(?:pezzo\s+di\s+guerra\s+fredda|guerra\s+fredda.*?quadranti)",
            r"\b(?:base\s+missilistica|basi\s+missilistiche)",
            r"\b(?:murgia\s+del\s+ceraso|pedalate\s+murgiane)",
            r"\b(?:storia\s+contemporanea.*?base|protagonisti.*?storia\s+contemporanea)",
            r"\b(?:luoghi\s+strani.*?storia|destinati\s+all'oblio.*?storia)",
        ],
    ),
    (
        "regulations",
        &[
            r"\b(?:norma\s+anti|piano\s+straordinario.*?gestione|contenimento.*?fauna)",
            r"\b(?:coldiretti.*?strumento|approvata.*?norma|regolamento.*?approvato)",
            r"\b(?:emergenza.*?cinghiali|fauna\s+selvatica.*?puglia)",
        ],
    ),
    (
        "highway_code",
        &[
            r"\b(?:nuovo\s+)?codice\s+della\s+strada",
            r"\b(?:legge.*?n\.\s*\d+.*?modificat[ao]|articoli.*?codice)",
            r"\b(?:comandante.*?vigili\s+urbani|vigili\s+urbani.*?parla)",
            r"\b(?:confisca.*?motocicli|circolazione\s+di\s+motocicli)",
            r"\b(?:giro\s+di\s+vite.*?ministero|ministero.*?interno.*?circolazione)",
        ],
    ),
    (
        "theatre",
        &[
            r"\b(?:alunni.*?portano.*?teatro|spettacolo.*?teatro|messo\s+in\s+scena)",
            r"\b(?:liceo.*?teatro|antigone.*?sofocle|teatro\s+comunale)",
            r"\b(?:mistero\s+buffo|dario\s+fo|giullare|teatro\s+medievale)",
            r"\b(?:arte\s+di\s+fo|tradizione\s+istituzionale\s+del\s+teatro)",
            r"\b(?:joculatores|homo\s+ludens|homo\s+cogitans)",
            r"\b(?:commedia\s+dell'arte|eduardo\s+de\s+filippo)",
        ],
    ),
    (
        "places",
        &[
            r"\b(?:masseria|masseria.*?resist.*?degrado|biciclette.*?bosco)",
            r"\b(?:gallerie.*?alberate|bosco.*?scoparella|macchia\s+boschiva)",
        ],
    ),
    (
        "personal_commemorations",
        &[
            r"\b(?:generosita.*?ricordo|ricordo\s+di.*?anni\s+fa|amici.*?colleghi.*?ricordare)",
            r"\b(?:sogni.*?irrimediabilmente\s+spezzati|perso\s+la\s+vita.*?anni\s+fa)",
            r"\b(?:donazione\s+degli\s+organi|hanno\s+vinto\s+tutti.*?piccoli\s+e\s+grandi)",
            r"\b(?:borsa\s+di\s+studio|consegna.*?borsa)\s+(?:in\s+memoria|memoria\s+di)",
            r"\b(?:scomparsi|scompars[ao])\s+(?:in\s+un\s+incidente|in\s+un\s+sinistro)\s+(?:stradale\s+)?nel(?:\s*\d{4})?",
            r"\b(?:cerimonia\s+di\s+consegna|consegna.*?borsa)\s+(?:alla\s+studentes?|studente)",
        ],
    ),
    (
        "structural_checks",
        &[
            r"\b(?:test|verifica|verifiche)\s+(?:per|sulla|della)\s+(?:staticita|stabilita)",
            r"\b(?:staticita|stabilita)\s+(?:del|della|dello)\s+(?:cavalcavia|ponte|struttura)",
            r"\b(?:cavalcavia|ponte|struttura)\s+(?:della|del|dello)\s+(?:ex\s+\d+|strada)",
            r"\b(?:ingegner|esperto|dipartimento)\s+(?:.*?staticita|.*?verifica)",
            r"\b(?:relazione\s+sullo\s+stato|stato\s+effettivo)\s+(?:del|della|dello)\s+(?:cavalcavia|ponte)",
        ],
    ),
    (
        "gossip",
        &[
            r"\b(?:conquista|conquistato|conquista\s+un)\s+(?:calciatore|calciatrice)",
            r"\b(?:grande\s+fratello|reality|gossip)",
            r"\b(?:pizzicat[ao]|dolce\s+compagnia|affascinante)\s+(?:calciatore|calciatrice)",
            r"\b(?:serata\s+milanese|galeotta)",
        ],
    ),
    (
        "brawls",
        &[
            r"\b(?:rissa|risse)\s+(?:sullo|sulla|tra|tra\s+due)",
            r"\b(?:morso|morsi)\s+(?:stacca|staccato)\s+(?:il\s+)?lobo",
            r"\b(?:lobo\s+(?:sinistro|destro|dell'orecchio))\s+(?:staccato|staccat[ao])",
            r"\b(?:contendenti?|rivale)\s+(?:con\s+il\s+lobo|violenta\s+rissa)",
            r"\b(?:scioccante\s+epilogo|violenta\s+rissa)",
            r"\b(?:stacc[ao]\s+a\s+morsi|morsi.*?orecchio|morso.*?lobo)",
            r"\b(?:lite\s+(?:per|a\s+causa\s+di)\s+(?:un\s+)?parcheggio|parcheggio.*?lite)",
        ],
    ),
    (
        "court_cases",
        &[
            r"\b(?:condannat[ao]\s+(?:a|alla)\s+(?:quasi\s+)?\d+\s+anni|pena.*?reclusione)",
            r"\b(?:rit[io]\s+abbreviato|gup\s+del\s+tribunale|tribunale\s+di\s+trani)",
            r"\b(?:pena\s+complessiva.*?anni|condannat[ao].*?reclusione)",
            r"\b(?:legittima\s+difesa|difesa\s+legittima)",
        ],
    ),
    (
        "opinion_pieces",
        &[
            r"\b(?:caro\s+professore|compito\s+di\s+classe)",
            r"\b(?:ventina\s+di\s+anni\s+fa.*?alunno|alunno.*?anni\s+fa)",
            r"\b(?:lettera|articolo\s+di\s+opinione|opinione)",
            r"\b(?:ho\s+letto\s+della\s+morte|ho\s+letto.*?morte)\s+(?:di|del|della)",
            r"\b(?:nei\s+giorni\s+appena\s+trascorsi|giorni\s+appena\s+trascorsi)",
            r"\b(?:eventi\s+che\s+hanno\s+caratterizzato|caratterizzato.*?cronaca)",
        ],
    ),
    (
        "road_education",
        &[
            r"\b(?:a\s+lezione\s+di|lezione\s+di)\s+educazione\s+stradale",
            r"\b(?:educazione\s+stradale|sicurezza\s+stradale)\s+(?:nelle\s+scuole|scuola|progetto)",
            r"\b(?:progetto.*?educazione\s+stradale|capofila.*?progetto.*?scuole)",
            r"\b(?:scuola\s+media|scuole\s+(?:elementari|superiori))\s+.*?(?:educazione|sicurezza)\s+stradale",
        ],
    ),
    (
        "sick_children",
        &[
            r"\b(?:bambino\s+malato|bambini\s+malati|diritti\s+negati)",
            r"\b(?:storia\s+dolorosa|percorso\s+duro)\s+(?:di\s+un\s+bambino|bambino)",
            r"\b(?:padre.*?chiede.*?rispetto|sopravvivenza\s+del\s+bambino)",
            r"\b(?:momento\s+difficile.*?famiglia|diritti.*?bambino)",
        ],
    ),
    (
        "chernobyl",
        &[
            r"\b(?:ragazzi\s+di\s+chernobyl|chernobyl|centrale\s+nucleare\s+di\s+chernobyl)",
            r"\b(?:orfani.*?chernobyl|incidente.*?centrale\s+nucleare)",
            r"\b(?:catastrofico\s+incidente.*?1986|26\s+aprile\s+1986)",
            r"\b(?:orfanotrofi.*?russia|kaluga|veronish)",
        ],
    ),
    (
        "local_economy",
        &[
            r"\b(?:disoccupazione.*?citta|disoccupazione\s+in\s+citta)",
            r"\b(?:fotografia.*?situazione\s+economica|situazione\s+economica\s+coratina)",
            r"\b(?:sociologo.*?palmisano|assessore.*?servizi\s+sociali)",
            r"\b(?:bilancio\s+comunale|camera\s+del\s+lavoro.*?cgil)",
            r"\b(?:guadagna\s+meno\s+di.*?euro|coratino.*?guadagna)",
        ],
    ),
    (
        "urban_works",
        &[
            r"\b(?:area\s+pedonale|aree\s+pedonali)\s+(?:rialzat[ao]|restituisce)",
            r"\b(?:riqualificazione.*?piazza|lavori\s+di\s+riqualificazione)",
            r"\b(?:pedonalizzazione.*?piazza|piazza.*?pedonalizzazione)",
            r"\b(?:consiglieri\s+comunali.*?contestato|vespaio\s+di\s+polemiche)",
            r"\b(?:stravolgimento.*?piazza|funzione\s+di\s+luogo\s+del\s+passeggio)",
            r"\b(?:caritas.*?area\s+pedonale|restituisce.*?piazza.*?funzione)",
        ],
    ),
    (
        "holiday_traffic_bulletins",
        &[
            r"\b(?:task-force.*?polizia\s+municipale|polizia\s+municipale.*?task-force)",
            r"\b(?:temperatura.*?rigida|veicoli.*?percorso.*?strade.*?campagna)",
        ],
    ),
    (
        "covid",
        &[
            r"\b(?:tamponi?|tampone)\s+(?:e\s+festivita|nelle\s+farmacie|nei\s+centri\s+analisi)",
            r"\b(?:ondata\s+di\s+contagi|contagi.*?travolto|nuovi\s+positivi)",
            r"\b(?:terza\s+ondata|farmacie.*?centri\s+analisi)",
            r"\b(?:tamponi.*?molecolari|tamponi.*?antigenici)",
            r"\b(?:asl.*?comune.*?positivi|positivi.*?superato)",
            r"\b(?:ondata|contagi|eventi?)\s+(?:ha\s+travolto|hanno\s+travolto)",
            r"\b(?:travolto|travolta)\s+(?:le\s+festivita|dalle\s+ondate|dai\s+contagi)",
        ],
    ),
    (
        "financial_markets",
        &[
            r"\b(?:borsa\s+e\s+investimenti|investimenti.*?mercati)",
            r"\b(?:mercati\s+finanziari|banche\s+centrali|inflazione)",
            r"\b(?:volatilita.*?mercati|risk\s+on|banchieri\s+centrali)",
            r"\b(?:mercato\s+criptovalutario|criptovalute|bitcoin|ethereum)",
            r"\b(?:monete\s+digitali|comparto.*?criptovalute)",
            r"\b(?:investimenti\s+online|trading\s+online|broker)",
            r"\b(?:strategie.*?investire|operare\s+sui\s+mercati)",
            r"\b(?:piattaforme.*?trading|piattaforme\s+internazionali)",
            r"\b(?:mercato\s+azionario|indici\s+azionari|rally\s+rialzista)",
            r"\b(?:correzione.*?mercato|terzo\s+trimestre.*?mercato)",
            r"\b(?:tendenza.*?caratterizzato.*?anno|binari\s+della\s+tendenza)",
        ],
    ),
    (
        "level_crossing_protests",
        &[
            r"\b(?:ostaggi\s+del\s+passaggio\s+a\s+livello|passaggio\s+a\s+livello.*?chiuso)",
            r"\b(?:protesta.*?passaggio\s+a\s+livello|passaggio\s+a\s+livello.*?protesta)",
            r"\b(?:chiusura\s+prolungata.*?passaggio|passaggio.*?chiusura\s+prolungata)",
            r"\b(?:residenti.*?confinati.*?sbarre|sbarre.*?impossibilitati)",
            r"\b(?:disagi.*?passaggio\s+a\s+livello|passaggio.*?disagi)",
            r"\b(?:via\s+bagnatoio.*?passaggio|passaggio.*?via\s+bagnatoio)",
        ],
    ),
];
